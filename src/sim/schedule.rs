// ---------------------------------------------------------------------------
// Display sampling
// ---------------------------------------------------------------------------

/// Running-threshold sampler for the trace table.
///
/// The first step at or after the threshold is accepted, then the threshold
/// moves forward by exactly one interval. It is never re-anchored to the
/// accepted time, so samples drift when `dt` does not divide the interval.
#[derive(Debug, Clone)]
pub struct DisplaySchedule {
    next_time: f64,
    interval: f64,
}

impl DisplaySchedule {
    pub fn new(interval: f64) -> Self {
        Self { next_time: 0.0, interval }
    }

    /// Returns true if `time` is due, and schedules the next sample.
    pub fn poll(&mut self, time: f64) -> bool {
        if time >= self.next_time {
            self.next_time += self.interval;
            true
        } else {
            false
        }
    }

    pub fn next_time(&self) -> f64 {
        self.next_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_is_always_due() {
        let mut s = DisplaySchedule::new(0.5);
        assert!(s.poll(0.001));
        assert!((s.next_time() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn threshold_advances_by_interval_not_by_time() {
        let mut s = DisplaySchedule::new(1.0);
        assert!(s.poll(0.3));
        assert!(!s.poll(0.9));
        assert!(s.poll(1.7));
        // Threshold is 2.0, not 2.7.
        assert!((s.next_time() - 2.0).abs() < 1e-12);
        assert!(s.poll(2.0));
    }

    #[test]
    fn coarse_steps_catch_up_one_interval_at_a_time() {
        let mut s = DisplaySchedule::new(0.1);
        assert!(s.poll(0.0));
        assert!(s.poll(0.35));
        assert!(s.poll(0.36));
        assert!(s.poll(0.37));
        assert!(!s.poll(0.38));
    }
}
