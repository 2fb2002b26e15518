// ABOUTME: In-memory Gateway for exercising paging and cleanup without a server.
// ABOUTME: Records every search and delete call for assertions.

use async_trait::async_trait;
use nexus_cleaner::nexus::{Gateway, GatewayError, Page, RawItem, Repository, RepositoryKind};
use nexus_cleaner::types::{AssetId, RepositoryName};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub struct FakeGateway {
    repositories: Vec<Repository>,
    pages: HashMap<String, Vec<Vec<RawItem>>>,
    failing_pages: HashSet<(String, usize)>,
    failing_deletes: HashSet<String>,
    pub searches: Mutex<Vec<(String, Option<String>)>>,
    pub deleted: Mutex<Vec<String>>,
    pub delete_attempts: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository whose listing is served in the given pages.
    pub fn repository(
        mut self,
        name: &str,
        format: &str,
        kind: RepositoryKind,
        pages: Vec<Vec<RawItem>>,
    ) -> Self {
        self.repositories.push(Repository {
            name: RepositoryName::new(name),
            format: format.to_string(),
            kind,
            url: None,
        });
        self.pages.insert(name.to_string(), pages);
        self
    }

    /// Shorthand for a hosted docker repository.
    pub fn hosted(self, name: &str, pages: Vec<Vec<RawItem>>) -> Self {
        self.repository(name, "docker", RepositoryKind::Hosted, pages)
    }

    pub fn fail_page(mut self, repository: &str, index: usize) -> Self {
        self.failing_pages.insert((repository.to_string(), index));
        self
    }

    pub fn fail_delete(mut self, asset: &str) -> Self {
        self.failing_deletes.insert(asset.to_string());
        self
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().clone()
    }

    pub fn delete_attempts(&self) -> Vec<String> {
        self.delete_attempts.lock().clone()
    }

    pub fn searches(&self) -> Vec<(String, Option<String>)> {
        self.searches.lock().clone()
    }
}

fn server_error(url: String) -> GatewayError {
    GatewayError::Status {
        url,
        status: 500,
        body: "boom".to_string(),
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn list_repositories(&self) -> Result<Vec<Repository>, GatewayError> {
        Ok(self.repositories.clone())
    }

    async fn search_page(
        &self,
        repository: &RepositoryName,
        cursor: Option<&str>,
    ) -> Result<Page, GatewayError> {
        self.searches
            .lock()
            .push((repository.to_string(), cursor.map(str::to_string)));

        let index: usize = cursor.map_or(0, |c| c.parse().expect("cursor is a page index"));
        if self
            .failing_pages
            .contains(&(repository.to_string(), index))
        {
            return Err(server_error(format!("search/{repository}/{index}")));
        }

        let pages = self.pages.get(repository.as_str()).cloned().unwrap_or_default();
        let items = pages.get(index).cloned().unwrap_or_default();
        let continuation_token = (index + 1 < pages.len()).then(|| (index + 1).to_string());

        Ok(Page {
            items,
            continuation_token,
        })
    }

    async fn delete_asset(&self, id: &AssetId) -> Result<(), GatewayError> {
        self.delete_attempts.lock().push(id.to_string());
        if self.failing_deletes.contains(id.as_str()) {
            return Err(server_error(format!("assets/{id}")));
        }
        self.deleted.lock().push(id.to_string());
        Ok(())
    }
}
