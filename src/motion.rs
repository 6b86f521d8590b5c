//! Rate limiting, viewport geometry and tweening shared by the page widgets.
//!
//! Everything here works on plain millisecond timestamps so the browser
//! bindings can feed `performance.now()` while tests feed fixed values.

#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_run: None,
        }
    }

    /// Returns true when the wrapped handler may run at `now_ms`.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Debounce {
    wait_ms: f64,
    deadline: Option<f64>,
}

impl Debounce {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms: f64::from(wait_ms),
            deadline: None,
        }
    }

    /// Time left before a pending call is due, if one is pending.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        self.deadline.map(|deadline| (deadline - now_ms).max(0.0))
    }

    pub fn touch(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.wait_ms);
    }

    pub fn fire_due(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub fn is_in_viewport(rect: Rect, viewport: Viewport) -> bool {
    rect.bottom > 0.0
        && rect.right > 0.0
        && rect.top < viewport.height
        && rect.left < viewport.width
}

/// Document offset that puts an element just below a fixed header.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (element_top + scroll_y - header_offset).max(0.0)
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn tween(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_runs_first_call_then_waits_for_interval() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(50.0));
        assert!(!throttle.ready(99.9));
        assert!(throttle.ready(100.0));
        assert!(!throttle.ready(150.0));
    }

    #[test]
    fn zero_interval_throttle_never_blocks() {
        let mut throttle = Throttle::new(0);
        assert!(throttle.ready(5.0));
        assert!(throttle.ready(5.0));
    }

    #[test]
    fn debounce_fires_once_after_quiet_period() {
        let mut debounce = Debounce::new(250);
        debounce.touch(0.0);
        debounce.touch(200.0);
        assert!(!debounce.fire_due(300.0));
        assert!(debounce.fire_due(450.0));
        assert!(!debounce.fire_due(900.0));
    }

    #[test]
    fn debounce_reports_time_left_until_due() {
        let mut debounce = Debounce::new(250);
        assert_eq!(debounce.remaining_ms(0.0), None);
        debounce.touch(100.0);
        assert_eq!(debounce.remaining_ms(300.0), Some(50.0));
        assert_eq!(debounce.remaining_ms(400.0), Some(0.0));
    }

    #[test]
    fn untouched_debounce_never_fires() {
        let mut debounce = Debounce::new(10);
        assert!(!debounce.fire_due(1_000.0));
    }

    #[test]
    fn viewport_intersection_checks_every_edge() {
        let viewport = Viewport {
            width: 1280.0,
            height: 720.0,
        };
        let visible = Rect {
            top: 700.0,
            left: 10.0,
            bottom: 900.0,
            right: 200.0,
        };
        let below = Rect {
            top: 720.0,
            left: 10.0,
            bottom: 900.0,
            right: 200.0,
        };
        let above = Rect {
            top: -300.0,
            left: 10.0,
            bottom: 0.0,
            right: 200.0,
        };

        assert!(is_in_viewport(visible, viewport));
        assert!(!is_in_viewport(below, viewport));
        assert!(!is_in_viewport(above, viewport));
    }

    #[test]
    fn scroll_target_accounts_for_header_and_never_goes_negative() {
        assert_eq!(scroll_target(400.0, 200.0, 70.0), 530.0);
        assert_eq!(scroll_target(10.0, 0.0, 70.0), 0.0);
    }

    #[test]
    fn scrolled_section_starts_right_below_the_header() {
        let header = 72.0;
        let element_top = 900.0;
        let target = scroll_target(element_top, 0.0, header);
        assert_eq!(element_top - target, header);
    }

    #[test]
    fn easing_is_clamped_and_monotonic() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.5));
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn tween_interpolates_between_bounds() {
        assert_eq!(tween(10.0, 20.0, 0.5), 15.0);
        assert_eq!(tween(10.0, 20.0, 3.0), 20.0);
    }
}
