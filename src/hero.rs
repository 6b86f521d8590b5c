use crate::config::HeroConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Types a phrase one character at a time, holds it, erases it, and moves on
/// to the next phrase, wrapping around the list.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_count: usize,
    deleting: bool,
    typing_speed_ms: u32,
    deleting_speed_ms: u32,
    pause_ms: u32,
    next_phrase_delay_ms: u32,
}

impl Typewriter {
    pub fn new(config: &HeroConfig) -> Self {
        Self {
            phrases: config.phrases.clone(),
            phrase_index: 0,
            char_count: 0,
            deleting: false,
            typing_speed_ms: config.typing_speed_ms,
            deleting_speed_ms: config.deleting_speed_ms,
            pause_ms: config.pause_ms,
            next_phrase_delay_ms: config.next_phrase_delay_ms,
        }
    }

    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advances one keystroke. `None` when there is nothing to type.
    pub fn step(&mut self) -> Option<TypingStep> {
        let phrase = self.phrases.get(self.phrase_index)?;
        let phrase_len = phrase.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_count = self.char_count.saturating_sub(1);
            self.deleting_speed_ms
        } else {
            self.char_count = (self.char_count + 1).min(phrase_len);
            self.typing_speed_ms
        };
        let text: String = phrase.chars().take(self.char_count).collect();

        if !self.deleting && self.char_count == phrase_len {
            self.deleting = true;
            delay_ms = self.pause_ms;
        } else if self.deleting && self.char_count == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = self.next_phrase_delay_ms;
        }

        Some(TypingStep { text, delay_ms })
    }
}

pub fn parallax_offset(scroll_y: f64, index: usize, config: &HeroConfig) -> f64 {
    scroll_y * (config.parallax_base + index as f64 * config.parallax_step)
}
