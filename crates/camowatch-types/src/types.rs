use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Rectangular screen area to sample, in absolute screen pixel coordinates.
///
/// Produced once by the selection glue before monitoring starts and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A one-shot unlock notification: the keyword line as recognized (original
/// casing, trimmed) and the wall-clock time it was first sighted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockEvent {
    pub line: String,
    pub at: SystemTime,
}

impl UnlockEvent {
    pub fn now(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            at: SystemTime::now(),
        }
    }
}
