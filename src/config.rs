use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional project configuration, merged under CLI flags.
/// All fields are optional to support partial configurations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CodestatConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan: Option<ScanConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_comments: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

pub const CONFIG_FILE_NAME: &str = ".codestat.json";
pub const CONFIG_ENV_VAR: &str = "CODESTAT_CONFIG";

/// Load configuration for a scan rooted at `root`.
///
/// `CODESTAT_CONFIG` points at an explicit config file and wins over a
/// `.codestat.json` in the root. A missing file yields the default (empty)
/// configuration; a file that exists but does not parse is an error.
pub fn load_config(root: &Path) -> Result<CodestatConfig> {
    let path = match env::var(CONFIG_ENV_VAR) {
        Ok(explicit) => PathBuf::from(explicit),
        Err(_) => root.join(CONFIG_FILE_NAME),
    };

    if !path.exists() {
        return Ok(CodestatConfig::default());
    }

    debug!("loading config from {}", path.display());
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config at {}", path.display()))
}

impl CodestatConfig {
    pub fn format(&self) -> Option<&str> {
        self.defaults.as_ref()?.format.as_deref()
    }

    pub fn db(&self) -> Option<&Path> {
        self.defaults.as_ref()?.db.as_deref()
    }

    pub fn include_comments(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.include_comments)
            .unwrap_or(false)
    }

    pub fn ignore_patterns(&self) -> Vec<String> {
        self.scan
            .as_ref()
            .and_then(|scan| scan.ignore.clone())
            .unwrap_or_default()
    }

    pub fn extensions(&self) -> Vec<String> {
        self.scan
            .as_ref()
            .and_then(|scan| scan.extensions.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_parses() {
        let config: CodestatConfig =
            serde_json::from_str(r#"{"defaults": {"format": "json"}}"#).unwrap();
        assert_eq!(config.format(), Some("json"));
        assert!(config.db().is_none());
        assert!(!config.include_comments());
        assert!(config.ignore_patterns().is_empty());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: CodestatConfig = serde_json::from_str("{}").unwrap();
        assert!(config.format().is_none());
        assert!(config.extensions().is_empty());
    }
}
