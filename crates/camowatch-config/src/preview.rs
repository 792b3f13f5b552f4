use serde::{Deserialize, Serialize};

fn default_interval_ms() -> u64 {
    500
}

fn default_path() -> String {
    "camowatch-preview.png".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PreviewConfig {
    pub enabled: bool,
    /// Minimum time between preview renders.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Where the preview snapshot is written.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_ms: default_interval_ms(),
            path: default_path(),
        }
    }
}
