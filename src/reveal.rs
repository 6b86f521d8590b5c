use std::collections::HashSet;
use std::hash::Hash;

pub const REVEAL_CLASSES: [&str; 4] = ["fade-in", "slide-in-left", "slide-in-right", "scale-in"];
pub const ANIMATED_CLASS: &str = "animated";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn reveal_selector() -> String {
    REVEAL_CLASSES
        .iter()
        .map(|class| format!(".{class}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Remembers which elements have already been revealed.
#[derive(Debug)]
pub struct RevealTracker<K> {
    animated: HashSet<K>,
    stagger_ms: u32,
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new(stagger_ms: u32) -> Self {
        Self {
            animated: HashSet::new(),
            stagger_ms,
        }
    }

    /// Returns the transition delay for an element entering the viewport, or
    /// `None` if it was revealed before.
    pub fn reveal(&mut self, key: K, sibling_index: usize) -> Option<u32> {
        if self.animated.insert(key) {
            Some(stagger_delay_ms(sibling_index, self.stagger_ms))
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn is_animated(&self, key: &K) -> bool {
        self.animated.contains(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.animated.len()
    }
}

pub fn stagger_delay_ms(sibling_index: usize, step_ms: u32) -> u32 {
    u32::try_from(sibling_index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// Visibility transitions as delivered by an intersection observer, collapsed
/// into "reveal now" decisions.
pub fn on_intersection<K: Eq + Hash>(
    tracker: &mut RevealTracker<K>,
    key: K,
    sibling_index: usize,
    is_intersecting: bool,
) -> Option<u32> {
    if is_intersecting {
        tracker.reveal(key, sibling_index)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_is_animated_exactly_once_across_reentries() {
        let mut tracker = RevealTracker::new(100);

        assert_eq!(on_intersection(&mut tracker, 7_usize, 0, true), Some(0));
        assert_eq!(on_intersection(&mut tracker, 7, 0, false), None);
        assert_eq!(on_intersection(&mut tracker, 7, 0, true), None);
        assert!(tracker.is_animated(&7));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn siblings_are_staggered() {
        let mut tracker = RevealTracker::new(100);
        assert_eq!(tracker.reveal("a", 0), Some(0));
        assert_eq!(tracker.reveal("b", 1), Some(100));
        assert_eq!(tracker.reveal("c", 3), Some(300));
    }

    #[test]
    fn not_intersecting_never_marks_element() {
        let mut tracker = RevealTracker::new(100);
        assert_eq!(on_intersection(&mut tracker, 1_usize, 0, false), None);
        assert!(!tracker.is_animated(&1));
    }

    #[test]
    fn stagger_saturates() {
        assert_eq!(stagger_delay_ms(usize::MAX, 100), u32::MAX);
    }

    #[test]
    fn selector_lists_every_reveal_class() {
        assert_eq!(
            reveal_selector(),
            ".fade-in, .slide-in-left, .slide-in-right, .scale-in"
        );
    }
}
