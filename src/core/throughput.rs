use std::fmt;
use std::time::{Duration, Instant};

use super::display_context::DisplayContext;

/// Frames between throughput reports
pub const REPORT_INTERVAL: u64 = 1000;

const MIB: f64 = 1024.0 * 1024.0;

/// Frame rate and fill rate over one measurement window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputReport {
    pub frames: u64,
    pub elapsed: Duration,
    pub frame_bytes: u64,
}

impl ThroughputReport {
    pub fn fps(&self) -> f64 {
        self.frames as f64 / self.elapsed.as_secs_f64()
    }

    /// Bytes of color written per second, in MiB
    pub fn fill_rate_mib(&self) -> f64 {
        (self.frames * self.frame_bytes) as f64 / (self.elapsed.as_secs_f64() * MIB)
    }
}

impl fmt::Display for ThroughputReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fps: {:.6}", self.fps())?;
        write!(f, "fill rate: {:.6} MiB/s", self.fill_rate_mib())
    }
}

/// Counts frames and emits a report every `interval` frames
///
/// Window state resets after each report.
#[derive(Debug, Clone)]
pub struct ThroughputMeter {
    interval: u64,
    frame_bytes: u64,
    frames: u64,
    window_start: Instant,
}

impl ThroughputMeter {
    pub fn new(context: &DisplayContext, start: Instant) -> Self {
        Self::with_interval(context, REPORT_INTERVAL, start)
    }

    pub fn with_interval(context: &DisplayContext, interval: u64, start: Instant) -> Self {
        Self {
            interval: interval.max(1),
            frame_bytes: context.frame_bytes(),
            frames: 0,
            window_start: start,
        }
    }

    /// Record one presented frame at `now`
    pub fn record_frame(&mut self, now: Instant) -> Option<ThroughputReport> {
        self.frames += 1;
        if self.frames < self.interval {
            return None;
        }

        let report = ThroughputReport {
            frames: self.frames,
            elapsed: now.saturating_duration_since(self.window_start),
            frame_bytes: self.frame_bytes,
        };
        self.frames = 0;
        self.window_start = now;

        Some(report)
    }

    /// Frames recorded in the current window
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn window_start(&self) -> Instant {
        self.window_start
    }
}
