use serde::{Deserialize, Serialize};

/// Chromactl configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChromactlConfig {
    /// Global configuration
    #[serde(default)]
    pub global: GlobalConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Prompt shown when reading a command interactively
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_prompt() -> String {
    ">> ".to_string()
}

impl Default for ChromactlConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            prompt: default_prompt(),
        }
    }
}
