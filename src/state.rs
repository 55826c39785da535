use std::time::{Duration, Instant};

/// Process-wide, read-only state shared with every worker.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
