use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row when no message is pending
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme slots, e.g. `green = "#1DB863"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
