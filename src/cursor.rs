pub const INTERACTIVE_SELECTOR: &str = "a, button, .work-item";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Pointer position plus an eased follower that trails it.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    easing: f64,
    pointer: Point,
    follower: Point,
    hovering: bool,
}

impl CursorTrail {
    pub fn new(easing: f64) -> Self {
        Self {
            easing: easing.clamp(0.0, 1.0),
            pointer: Point::default(),
            follower: Point::default(),
            hovering: false,
        }
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    #[cfg(test)]
    pub fn follower(&self) -> Point {
        self.follower
    }

    #[cfg(test)]
    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pointer = Point { x, y };
    }

    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        std::mem::replace(&mut self.hovering, hovering) != hovering
    }

    /// Advances the follower one animation frame toward the pointer.
    pub fn step(&mut self) -> Point {
        self.follower.x += (self.pointer.x - self.follower.x) * self.easing;
        self.follower.y += (self.pointer.y - self.follower.y) * self.easing;
        self.follower
    }
}

pub fn translate(point: Point) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follower_eases_toward_pointer() {
        let mut trail = CursorTrail::new(0.1);
        trail.move_to(100.0, 50.0);

        let first = trail.step();
        assert!((first.x - 10.0).abs() < 1e-9);
        assert!((first.y - 5.0).abs() < 1e-9);

        let second = trail.step();
        assert!((second.x - 19.0).abs() < 1e-9);
        assert_eq!(trail.pointer(), Point { x: 100.0, y: 50.0 });
    }

    #[test]
    fn follower_converges_on_a_still_pointer() {
        let mut trail = CursorTrail::new(0.1);
        trail.move_to(300.0, 300.0);
        for _ in 0..200 {
            trail.step();
        }
        assert!((trail.follower().x - 300.0).abs() < 0.01);
    }

    #[test]
    fn hover_change_is_reported_only_on_transition() {
        let mut trail = CursorTrail::new(0.5);
        assert!(trail.set_hovering(true));
        assert!(!trail.set_hovering(true));
        assert!(trail.hovering());
        assert!(trail.set_hovering(false));
    }

    #[test]
    fn translate_formats_two_decimals() {
        assert_eq!(
            translate(Point { x: 1.0, y: 2.5 }),
            "translate3d(1.00px, 2.50px, 0)"
        );
    }
}
