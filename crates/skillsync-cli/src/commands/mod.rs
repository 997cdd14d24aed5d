//! Subcommand implementations.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use skillsync_client::config::{create_store, load_config_from};
use skillsync_core::traits::{AssessmentStore, Confirm};
use skillsync_core::ViewBinder;

pub mod add;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod render;
pub mod show;
pub mod update;

/// Where the store lives, as given on the command line.
pub struct Target {
    pub config: Option<PathBuf>,
    pub endpoint: Option<String>,
}

impl Target {
    /// Build the configured store; `--endpoint` wins over the config file.
    pub fn open_store(&self) -> Result<Box<dyn AssessmentStore>> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        tracing::debug!(endpoint = %config.endpoint, backend = ?config.backend, "using store");
        create_store(&config)
    }

    pub fn binder(&self) -> Result<ViewBinder<Box<dyn AssessmentStore>>> {
        Ok(ViewBinder::new(self.open_store()?))
    }
}

/// Asks on stderr and reads the answer from stdin. Anything but y/yes is a no.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
