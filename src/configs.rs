use crate::experian::{AccountMergeStrategy, ExtractOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_DIR_ENV: &str = "REPORTS_CONFIG_PATH";
pub const CONFIG_FILE_NAME: &str = "service.json";

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default)]
    pub account_merge: AccountMergeStrategy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_upload_bytes: default_max_upload_bytes(),
            account_merge: AccountMergeStrategy::default(),
        }
    }
}

impl ServiceConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {CONFIG_FILE_NAME}: {e}"))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
    }

    /// Reads `service.json` from the directory in `REPORTS_CONFIG_PATH`, or returns defaults
    /// when the variable is unset.
    pub fn load_default() -> Result<Self, String> {
        match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => Self::load_from_file(Path::new(&dir).join(CONFIG_FILE_NAME)),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            account_merge: self.account_merge,
        }
    }
}
