use crate::config::LoadingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Showing,
    Fading,
    Done,
}

impl LoadingPhase {
    pub fn overlay_class(self) -> Option<&'static str> {
        match self {
            Self::Showing => None,
            Self::Fading | Self::Done => Some("hidden"),
        }
    }
}

/// Splash overlay lifecycle. The progress bar animation runs for
/// `duration_ms`, then the overlay fades for `fade_ms` and is removed.
#[derive(Clone, Debug)]
pub struct LoadingSequence {
    duration_ms: u32,
    fade_ms: u32,
    phase: LoadingPhase,
    signalled: bool,
}

impl LoadingSequence {
    pub fn new(config: &LoadingConfig) -> Self {
        Self {
            duration_ms: config.duration_ms,
            fade_ms: config.fade_ms,
            phase: LoadingPhase::Showing,
            signalled: false,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Time until the current phase ends: the progress animation while
    /// showing, the fade while fading. `None` once the overlay is gone.
    pub fn next_delay(&self) -> Option<u32> {
        match self.phase {
            LoadingPhase::Showing => Some(self.duration_ms),
            LoadingPhase::Fading => Some(self.fade_ms),
            LoadingPhase::Done => None,
        }
    }

    /// Ends the progress animation. Returns true only the first time, which is
    /// when the body marker and the completion event must be emitted.
    pub fn finish_progress(&mut self) -> bool {
        if self.phase == LoadingPhase::Showing {
            self.phase = LoadingPhase::Fading;
        }
        !std::mem::replace(&mut self.signalled, true)
    }

    pub fn finish_fade(&mut self) {
        self.phase = LoadingPhase::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> LoadingSequence {
        LoadingSequence::new(&LoadingConfig {
            duration_ms: 2_000,
            fade_ms: 500,
        })
    }

    #[test]
    fn body_marker_is_signalled_exactly_once() {
        let mut sequence = sequence();
        assert!(sequence.finish_progress());
        assert!(!sequence.finish_progress());
        sequence.finish_fade();
        assert!(!sequence.finish_progress());
        assert_eq!(sequence.phase(), LoadingPhase::Done);
    }

    #[test]
    fn overlay_is_gone_within_configured_window() {
        let mut sequence = sequence();
        let mut elapsed = 0;

        elapsed += sequence.next_delay().expect("progress delay");
        assert_eq!(elapsed, 2_000);
        sequence.finish_progress();

        elapsed += sequence.next_delay().expect("fade delay");
        sequence.finish_fade();

        assert_eq!(sequence.next_delay(), None);
        assert_eq!(elapsed, 2_500);
    }

    #[test]
    fn schedule_follows_configured_timings() {
        let mut sequence = LoadingSequence::new(&LoadingConfig {
            duration_ms: 800,
            fade_ms: 120,
        });
        assert_eq!(sequence.next_delay(), Some(800));
        sequence.finish_progress();
        assert_eq!(sequence.next_delay(), Some(120));
    }

    #[test]
    fn phases_advance_in_order() {
        let mut sequence = sequence();
        assert_eq!(sequence.phase().overlay_class(), None);
        sequence.finish_progress();
        assert_eq!(sequence.phase(), LoadingPhase::Fading);
        assert_eq!(sequence.phase().overlay_class(), Some("hidden"));
        sequence.finish_fade();
        assert_eq!(sequence.phase(), LoadingPhase::Done);
    }
}
