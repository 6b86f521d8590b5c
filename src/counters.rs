use crate::motion::{ease_out_cubic, tween};

pub const COUNTER_TICK_MS: u32 = 16;
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const SKILLS_VISIBILITY_THRESHOLD: f64 = 0.3;

/// One-shot count-up from zero to `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: u32,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
        }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if self.duration_ms == 0 || elapsed_ms >= f64::from(self.duration_ms) {
            return self.target;
        }
        let progress = ease_out_cubic(elapsed_ms / f64::from(self.duration_ms));
        tween(0.0, f64::from(self.target), progress).floor() as u32
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= f64::from(self.duration_ms)
    }
}

pub fn format_stat(value: u32, suffix: &str) -> String {
    format!("{value}{suffix}")
}

pub fn skill_width(level: u8) -> u8 {
    level.min(100)
}

/// Inline style for a skill bar; bars stay empty until their section shows.
pub fn skill_bar_style(level: u8, index: usize, stagger_ms: u32, visible: bool) -> String {
    if visible {
        let delay = crate::reveal::stagger_delay_ms(index, stagger_ms);
        format!(
            "width: {}%; transition-delay: {delay}ms;",
            skill_width(level)
        )
    } else {
        "width: 0%;".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_up_starts_at_zero_and_lands_on_target() {
        let counter = CountUp::new(48, 2_000);
        assert_eq!(counter.value_at(0.0), 0);
        assert_eq!(counter.value_at(2_000.0), 48);
        assert_eq!(counter.value_at(9_999.0), 48);
        assert!(counter.is_finished(2_000.0));
        assert!(!counter.is_finished(1_999.0));
    }

    #[test]
    fn count_up_never_decreases() {
        let counter = CountUp::new(1_000, 2_000);
        let mut previous = 0;
        for tick in 0..=125 {
            let value = counter.value_at(f64::from(tick * COUNTER_TICK_MS));
            assert!(value >= previous);
            assert!(value <= 1_000);
            previous = value;
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(CountUp::new(5, 0).value_at(0.0), 5);
    }

    #[test]
    fn stat_suffix_is_appended() {
        assert_eq!(format_stat(48, "+"), "48+");
        assert_eq!(format_stat(6, ""), "6");
    }

    #[test]
    fn skill_bars_fill_once_visible_with_stagger() {
        assert_eq!(skill_bar_style(85, 2, 200, false), "width: 0%;");
        assert_eq!(
            skill_bar_style(85, 2, 200, true),
            "width: 85%; transition-delay: 400ms;"
        );
        assert_eq!(skill_width(140), 100);
    }
}
