pub const DEFAULT_WINDOW_MS: i64 = 60 * 1000;
pub const DEFAULT_MULTIPLIER: f64 = 3.0;

/// Number of prior windows averaged into the baseline.
const BASELINE_WINDOWS: i64 = 5;
/// A spike always needs at least this many mentions in the recent window.
const MIN_SPIKE_COUNT: f64 = 3.0;

/// Flags abnormal recent mention volume against a trailing baseline.
///
/// The recent window is `[now - W, now]`. The baseline is the count in
/// `[now - 6W, now - W)` averaged over five windows. With an empty baseline
/// no spike is ever reported; otherwise a spike needs
/// `current >= max(3, multiplier * baseline)`.
#[derive(Debug, Clone, Copy)]
pub struct SpikeDetector {
    window_ms: i64,
    multiplier: f64,
}

impl Default for SpikeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS, DEFAULT_MULTIPLIER)
    }
}

impl SpikeDetector {
    pub fn new(window_ms: i64, multiplier: f64) -> Self {
        Self {
            window_ms,
            multiplier,
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window_ms
    }

    pub fn detect<'a, I>(&self, history: I, now: i64) -> bool
    where
        I: IntoIterator<Item = &'a i64>,
    {
        let window_start = now - self.window_ms;
        let baseline_start = now - (BASELINE_WINDOWS + 1) * self.window_ms;

        let mut current = 0usize;
        let mut baseline = 0usize;
        for &ts in history {
            if ts >= window_start && ts <= now {
                current += 1;
            } else if ts >= baseline_start && ts < window_start {
                baseline += 1;
            }
        }

        let prev_avg = baseline as f64 / BASELINE_WINDOWS as f64;
        if prev_avg == 0.0 {
            return false;
        }
        current as f64 >= MIN_SPIKE_COUNT.max(self.multiplier * prev_avg)
    }
}

/// Spike check with the default 60 s window and 3x multiplier.
pub fn detect_spike<'a, I>(history: I, now: i64) -> bool
where
    I: IntoIterator<Item = &'a i64>,
{
    SpikeDetector::default().detect(history, now)
}
