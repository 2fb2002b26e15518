// ABOUTME: Config scaffolding for new installations.
// ABOUTME: Creates a nexus-cleaner.yml template file.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::KeepCount;

use super::CONFIG_FILENAME;

/// Write a template config into `dir` and return its path.
pub fn init_config(dir: &Path, url: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let url = url.unwrap_or("https://nexus.example.com");
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(Error::InvalidConfig(format!(
            "url must start with http:// or https://: {url}"
        )));
    }

    std::fs::write(&config_path, generate_template_yaml(url))?;
    Ok(config_path)
}

fn generate_template_yaml(url: &str) -> String {
    format!(
        r#"url: {url}
login: cleaner
password:
  env: NEXUS_PASSWORD
# format: docker
# timeout: 30s

retention:
  # Newest versions of every image that are never deleted (minimum {min}).
  keep: {keep}
  # Only delete versions older than this.
  # max_age: 30days
  # Only clean these images.
  # names:
  #   - my-app
"#,
        min = KeepCount::MIN,
        keep = KeepCount::DEFAULT,
    )
}
