use std::time::{Duration, Instant};

use camowatch_config::detection::DetectionConfig;
use camowatch_types::UnlockEvent;
use tokio_util::sync::CancellationToken;

use crate::debounce::UnlockDebouncer;
use crate::error::{CaptureError, WatchError};
use crate::filter::find_keyword_line;

/// One captured raster of the watched region. Lives for a single poll.
pub type Frame = image::RgbImage;

/// Produces one frame for the configured region on demand.
///
/// `Ok(None)` means no frame is ready yet (backend warming up, capture
/// glitch); the loop skips the poll and retries shortly. An `Err` means the
/// capture handle is broken and the loop must stop. Backend resources are
/// released when the source is dropped, which the loop guarantees on every
/// exit path.
pub trait FrameSource {
    fn capture(&mut self) -> Result<Option<Frame>, CaptureError>;
}

/// Recognizes text in a frame, one trimmed line per entry, in the order the
/// engine reports them. Engine faults are absorbed and reported as zero
/// lines; extraction never fails the loop.
pub trait TextExtractor {
    fn extract(&mut self, frame: &Frame) -> Vec<String>;
}

/// Low-rate operator feedback. Purely observational: render failures stay
/// inside the sink and detection state never depends on it.
pub trait PreviewSink {
    fn render(&mut self, frame: &Frame);
}

/// The poll loop: capture, extract, filter, debounce, optionally preview.
///
/// Runs synchronously and blocks between polls; intended for
/// `tokio::task::spawn_blocking`. Cancellation is cooperative, checked once
/// per iteration boundary.
pub struct MonitorLoop<S, X> {
    source: S,
    extractor: X,
    keyword: String,
    detection_timeout: Duration,
    poll_delay: Duration,
    preview: Option<Box<dyn PreviewSink + Send>>,
    preview_interval: Duration,
    cancel: CancellationToken,
}

impl<S, X> MonitorLoop<S, X>
where
    S: FrameSource,
    X: TextExtractor,
{
    pub fn new(source: S, extractor: X, detection: &DetectionConfig, cancel: CancellationToken) -> Self {
        Self {
            source,
            extractor,
            keyword: detection.keyword.clone(),
            detection_timeout: Duration::from_millis(detection.detection_timeout_ms),
            poll_delay: Duration::from_millis(detection.poll_delay_ms),
            preview: None,
            preview_interval: Duration::ZERO,
            cancel,
        }
    }

    pub fn with_preview(mut self, sink: Box<dyn PreviewSink + Send>, interval: Duration) -> Self {
        self.preview = Some(sink);
        self.preview_interval = interval;
        self
    }

    /// Poll until cancelled or the capture handle breaks. Emitted events go
    /// to `on_unlock`; the frame source and preview sink are dropped before
    /// this returns, on every path.
    pub fn run(mut self, mut on_unlock: impl FnMut(UnlockEvent)) -> Result<(), WatchError> {
        let mut debouncer = UnlockDebouncer::new(self.detection_timeout);
        let mut last_render: Option<Instant> = None;

        tracing::info!(keyword = %self.keyword, "monitoring started");

        while !self.cancel.is_cancelled() {
            let frame = match self.source.capture() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    tracing::debug!("no frame ready, skipping poll");
                    std::thread::sleep(self.poll_delay);
                    continue;
                }
                Err(e) => {
                    tracing::error!("capture handle broken: {e}");
                    return Err(e.into());
                }
            };

            let lines = self.extractor.extract(&frame);
            let candidate = find_keyword_line(&lines, &self.keyword);
            let now = Instant::now();

            if let Some(event) = debouncer.observe(candidate, now) {
                tracing::info!(line = %event.line, "unlock detected");
                on_unlock(event);
            }

            if let Some(sink) = self.preview.as_deref_mut() {
                let due = last_render
                    .is_none_or(|at| now.duration_since(at) >= self.preview_interval);
                if due {
                    sink.render(&frame);
                    last_render = Some(now);
                }
            }

            std::thread::sleep(self.poll_delay);
        }

        tracing::info!("monitoring stopped");
        Ok(())
    }
}
