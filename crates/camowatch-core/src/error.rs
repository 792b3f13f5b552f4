use thiserror::Error;

/// Fatal capture failures. Transient absence of a frame is not an error;
/// frame sources report it as `Ok(None)` and the loop retries next poll.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no capture monitor available")]
    NoMonitor,
    #[error("capture backend failure: {0}")]
    Backend(String),
}

/// Terminal error surfaced by the monitor loop. Cancellation is not an
/// error and returns `Ok`.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
}
