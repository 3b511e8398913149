use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Form lifecycle settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Forms kept in the tree after their owner unmounts (e.g., multi-step wizards).
    #[serde(default)]
    pub persistent: Vec<String>,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}

impl FormsConfig {
    pub fn is_persistent(&self, form: &str) -> bool {
        self.persistent.iter().any(|name| name == form)
    }
}
