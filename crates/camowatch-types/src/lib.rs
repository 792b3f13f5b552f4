pub mod types;

pub use types::{CaptureRegion, UnlockEvent};
