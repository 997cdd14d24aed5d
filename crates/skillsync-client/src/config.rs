//! Store configuration and factory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use skillsync_core::traits::AssessmentStore;

use crate::http::HttpStore;
use crate::memory::MemoryStore;

/// The deployed assessments endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://68sje39s3m.execute-api.us-east-1.amazonaws.com/Prod/skills-assessments";

/// Which store implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Http,
    /// Process-local records, lost on exit.
    Memory,
}

/// Top-level skillsync configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsyncConfig {
    /// URL every operation is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout; none unless set.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub backend: Backend,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SkillsyncConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: None,
            backend: Backend::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        // Substituted text is not scanned again.
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `skillsync.toml` in the current directory
/// 2. `~/.config/skillsync/config.toml`
///
/// `SKILLSYNC_ENDPOINT` overrides the endpoint from any file.
pub fn load_config() -> Result<SkillsyncConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<SkillsyncConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("skillsync.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SkillsyncConfig::default(),
    };

    if let Ok(endpoint) = std::env::var("SKILLSYNC_ENDPOINT") {
        if !endpoint.is_empty() {
            config.endpoint = endpoint;
        }
    }

    Ok(config)
}

/// Parse a config file body and resolve `${VAR}` references.
pub fn parse_config(content: &str) -> Result<SkillsyncConfig> {
    let mut config: SkillsyncConfig = toml::from_str(content)?;
    config.endpoint = resolve_env_vars(&config.endpoint);
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("skillsync"))
}

/// Create a store instance from configuration.
pub fn create_store(config: &SkillsyncConfig) -> Result<Box<dyn AssessmentStore>> {
    match config.backend {
        Backend::Http => {
            if config.endpoint.trim().is_empty() {
                anyhow::bail!("no endpoint configured");
            }
            let timeout = config.timeout_secs.map(Duration::from_secs);
            let store = HttpStore::new(&config.endpoint, timeout)?;
            Ok(Box::new(store))
        }
        Backend::Memory => Ok(Box::new(MemoryStore::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_SKILLSYNC_TEST_HOST", "example.test");
        assert_eq!(resolve_env_vars("${_SKILLSYNC_TEST_HOST}"), "example.test");
        assert_eq!(
            resolve_env_vars("https://${_SKILLSYNC_TEST_HOST}/skills"),
            "https://example.test/skills"
        );
        std::env::remove_var("_SKILLSYNC_TEST_HOST");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_SKILLSYNC_TEST_NESTED", "${_SKILLSYNC_TEST_NESTED}");
        assert_eq!(
            resolve_env_vars("a/${_SKILLSYNC_TEST_NESTED}/b"),
            "a/${_SKILLSYNC_TEST_NESTED}/b"
        );
        std::env::set_var("_SKILLSYNC_TEST_OPEN", "x${y");
        assert_eq!(resolve_env_vars("${_SKILLSYNC_TEST_OPEN}-z"), "x${y-z");
        std::env::remove_var("_SKILLSYNC_TEST_NESTED");
        std::env::remove_var("_SKILLSYNC_TEST_OPEN");
    }

    #[test]
    fn resolve_env_vars_keeps_unterminated_reference() {
        assert_eq!(resolve_env_vars("pre ${UNCLOSED"), "pre ${UNCLOSED");
    }

    #[test]
    fn default_config() {
        let config = SkillsyncConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.backend, Backend::Http);
    }

    #[test]
    fn parse_full_config() {
        let config = parse_config(
            r#"
endpoint = "http://localhost:3000/skills-assessments"
timeout_secs = 10
backend = "memory"
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:3000/skills-assessments");
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.backend, Backend::Memory);
    }

    #[test]
    fn load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skillsync.toml");
        std::fs::write(&path, "backend = \"memory\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.backend, Backend::Memory);

        let missing = dir.path().join("nope.toml");
        assert!(load_config_from(Some(&missing)).is_err());
    }

    #[test]
    fn create_store_picks_backend() {
        let memory = SkillsyncConfig {
            backend: Backend::Memory,
            ..SkillsyncConfig::default()
        };
        assert_eq!(create_store(&memory).unwrap().name(), "memory");
        assert_eq!(
            create_store(&SkillsyncConfig::default()).unwrap().name(),
            "http"
        );
    }
}
