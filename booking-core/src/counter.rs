use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Counts an outcome figure up from zero with an ease-out-quart curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub target: u32,
    pub duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration: DEFAULT_DURATION,
        }
    }

    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, elapsed: Duration) -> u32 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.target;
        }
        (ease_out_quart(progress) * self.target as f64).floor() as u32
    }

    pub fn label_at(&self, elapsed: Duration) -> String {
        format!("{}%", self.value_at(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        let counter = CounterAnimation::new(95);
        assert_eq!(counter.value_at(Duration::ZERO), 0);
        assert_eq!(counter.label_at(Duration::from_millis(2000)), "95%");
        assert_eq!(counter.value_at(Duration::from_secs(10)), 95);
        assert!(counter.is_finished(Duration::from_millis(2000)));
    }

    #[test]
    fn halfway_is_well_past_half() {
        let counter = CounterAnimation::new(100);
        // 1 - 0.5^4 = 0.9375
        assert_eq!(counter.value_at(Duration::from_millis(1000)), 93);
    }

    #[test]
    fn values_never_decrease() {
        let counter = CounterAnimation::new(87);
        let mut last = 0;
        for ms in (0..=2000).step_by(16) {
            let value = counter.value_at(Duration::from_millis(ms));
            assert!(value >= last);
            last = value;
        }
    }
}
