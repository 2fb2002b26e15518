// ABOUTME: Repos command implementation.
// ABOUTME: Lists the hosted repositories the clean command would visit.

use nexus_cleaner::cleanup::Cleaner;
use nexus_cleaner::config::{Config, PolicyOverrides};
use nexus_cleaner::error::Result;
use nexus_cleaner::nexus::NexusClient;
use nexus_cleaner::output::Output;

pub async fn repos(config: Config, output: Output) -> Result<()> {
    let policy = config.retention.policy(&PolicyOverrides::default())?;
    let client = NexusClient::new(&config)?;

    let repositories = Cleaner::new(&client, policy)
        .format(config.format.as_str())
        .repositories()
        .await?;

    if repositories.is_empty() {
        output.warning(&format!(
            "no hosted {} repositories on {}",
            config.format,
            client.base_url()
        ));
        return Ok(());
    }

    for repository in &repositories {
        output.json("repository", repository);
        output.line(&format!(
            "{}\t{}\t{}",
            repository.name, repository.format, repository.kind
        ));
    }
    Ok(())
}
