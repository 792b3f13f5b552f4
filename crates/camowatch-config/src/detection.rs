use serde::{Deserialize, Serialize};

fn default_keyword() -> String {
    "camo".to_string()
}

fn default_detection_timeout_ms() -> u64 {
    1000
}

fn default_poll_delay_ms() -> u64 {
    50
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DetectionConfig {
    /// Case-insensitive substring that marks an unlock line.
    #[serde(default = "default_keyword")]
    pub keyword: String,
    /// Grace period before an announced line that is no longer sighted is
    /// forgotten and may be announced again.
    #[serde(default = "default_detection_timeout_ms")]
    pub detection_timeout_ms: u64,
    /// Inter-iteration sleep; bounds CPU usage, does not change semantics.
    #[serde(default = "default_poll_delay_ms")]
    pub poll_delay_ms: u64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            detection_timeout_ms: default_detection_timeout_ms(),
            poll_delay_ms: default_poll_delay_ms(),
        }
    }
}
