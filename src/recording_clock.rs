//! Elapsed recording time shown by the overlay while recording.

use std::time::{Duration, Instant};

use crate::overlay::ElapsedTimeSource;

/// Stopwatch for the current recording session.
///
/// Time accumulates across `start`/`stop` pairs until `reset`.
#[derive(Clone, Debug, Default)]
pub struct RecordingClock {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl RecordingClock {
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(started_at);
        }
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        let running = self
            .started_at
            .map_or(Duration::ZERO, |started_at| now.saturating_duration_since(started_at));
        self.accumulated + running
    }
}

impl ElapsedTimeSource for RecordingClock {
    fn elapsed_time_text(&self) -> String {
        format_elapsed(self.elapsed_at(Instant::now()))
    }
}

/// Format as `HH:MM:SS:mmm`; hours keep counting past 99.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let secs = (total_ms / 1_000) % 60;
    let millis = total_ms % 1_000;
    format!("{hours:02}:{minutes:02}:{secs:02}:{millis:03}")
}
