use camowatch_types::CaptureRegion;
use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "eng".to_string()
}

/// Page segmentation mode 6: a single uniform block of text. The monitored
/// region holds short isolated strings, so full-page layout analysis would
/// only hurt recall.
fn default_psm() -> u32 {
    6
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_psm")]
    pub psm: u32,
    /// Explicit tessdata directory; falls back to the engine's own search
    /// paths (TESSDATA_PREFIX etc.) when unset.
    pub datapath: Option<String>,
    pub capture_region: Option<CaptureRegion>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            psm: default_psm(),
            datapath: None,
            capture_region: None,
        }
    }
}
