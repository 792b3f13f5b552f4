use std::sync::Arc;
use std::time::Duration;

use camowatch_core::monitor::MonitorLoop;
use camowatch_ocr::{TesseractExtractor, XcapFrameSource};
use camowatch_types::UnlockEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::notify::notifier_loop;
use crate::preview::PngPreview;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub events: (AsyncSender<UnlockEvent>, AsyncReceiver<UnlockEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(256), // OCR burst capacity
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks(&self, json_output: bool) -> JoinSet<anyhow::Result<()>> {
        let config = self.state.config.read().await.clone();
        let channels = ChannelSet::new();
        let (event_tx, event_rx) = channels.events;

        let mut tasks = JoinSet::new();

        // Monitor loop: blocking capture/OCR, so it lives on the blocking
        // pool and bridges events back through the channel.
        let cancel = self.cancel_token.child_token();
        tasks.spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let source = XcapFrameSource::new(config.ocr.capture_region);
                let extractor = TesseractExtractor::new(
                    &config.ocr.language,
                    config.ocr.psm,
                    config.ocr.datapath.clone(),
                );

                let mut monitor = MonitorLoop::new(source, extractor, &config.detection, cancel);
                if config.preview.enabled {
                    monitor = monitor.with_preview(
                        Box::new(PngPreview::new(&config.preview.path)),
                        Duration::from_millis(config.preview.interval_ms),
                    );
                }

                monitor.run(move |event| match event_tx.try_send(event) {
                    Ok(true) => {}
                    Ok(false) => tracing::warn!("event channel full, dropping notification"),
                    Err(_) => tracing::warn!("event channel closed, dropping notification"),
                })
            })
            .await;

            match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(anyhow::Error::new(e)),
                Err(e) => Err(anyhow::anyhow!("monitor task panicked: {e}")),
            }
        });

        // Notifier: exits once the monitor loop drops its sender.
        tasks.spawn(notifier_loop(event_rx, json_output));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
