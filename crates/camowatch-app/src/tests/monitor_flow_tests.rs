//! End-to-end flow of the monitor loop under the app's task wiring:
//! blocking pool, kanal bridge, cooperative cancellation.

use std::time::Duration;

use camowatch_config::detection::DetectionConfig;
use camowatch_core::error::CaptureError;
use camowatch_core::monitor::{Frame, FrameSource, MonitorLoop, TextExtractor};
use camowatch_types::UnlockEvent;
use kanal::bounded_async;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

struct SolidSource;

impl FrameSource for SolidSource {
    fn capture(&mut self) -> Result<Option<Frame>, CaptureError> {
        Ok(Some(Frame::new(8, 8)))
    }
}

struct FixedExtractor(Vec<String>);

impl TextExtractor for FixedExtractor {
    fn extract(&mut self, _frame: &Frame) -> Vec<String> {
        self.0.clone()
    }
}

fn detection() -> DetectionConfig {
    DetectionConfig {
        keyword: "camo".to_string(),
        detection_timeout_ms: 1000,
        poll_delay_ms: 1,
    }
}

#[tokio::test]
async fn monitor_loop_bridges_one_event_and_honors_cancellation() {
    let (tx, rx) = bounded_async::<UnlockEvent>(16);
    let cancel = CancellationToken::new();

    let loop_cancel = cancel.clone();
    let handle = tokio::task::spawn_blocking(move || {
        let extractor = FixedExtractor(vec!["New Camo Unlocked: Gold".to_string()]);
        MonitorLoop::new(SolidSource, extractor, &detection(), loop_cancel)
            .run(move |event| {
                let _ = tx.try_send(event);
            })
    });

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(event.line, "New Camo Unlocked: Gold");

    cancel.cancel();
    let result = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
    assert!(result.is_ok());

    // The same line stays announced for the whole run, so at most that one
    // event is in flight; anything further would be a dedup failure.
    assert!(!matches!(rx.try_recv(), Ok(Some(_))));
}
