use std::time::{Duration, Instant};

use camowatch_types::UnlockEvent;

#[derive(Debug)]
struct Announced {
    line: String,
    since: Instant,
}

/// Dedup state machine for unlock lines.
///
/// `Idle` until a keyword line is sighted, then `Announced(line, since)`
/// while that same line keeps being sighted within `timeout` of its last
/// sighting. OCR is noisy frame-to-frame; the timeout treats a line that
/// flickers in and out of recognition as continuously present.
pub struct UnlockDebouncer {
    timeout: Duration,
    announced: Option<Announced>,
}

impl UnlockDebouncer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            announced: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.announced.is_none()
    }

    /// Evaluate one poll. Returns the event to emit, if any.
    ///
    /// The timeout is applied before the candidate is examined, so a line
    /// whose window just lapsed frees the slot for a new announcement in
    /// this same poll.
    pub fn observe(&mut self, candidate: Option<&str>, now: Instant) -> Option<UnlockEvent> {
        if let Some(announced) = &self.announced {
            if now.duration_since(announced.since) > self.timeout {
                self.announced = None;
            }
        }

        if let Some(announced) = self.announced.as_mut() {
            // A re-sighting refreshes the window; a different candidate (or
            // none) while a line is still within its window is not an
            // emission trigger.
            if candidate == Some(announced.line.as_str()) {
                announced.since = now;
            }
            return None;
        }

        let line = candidate?;
        self.announced = Some(Announced {
            line: line.to_string(),
            since: now,
        });
        Some(UnlockEvent::now(line))
    }
}
