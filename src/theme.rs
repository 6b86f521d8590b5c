#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn navbar_background(self) -> &'static str {
        match self {
            Self::Light => "rgba(255, 255, 255, 0.95)",
            Self::Dark => "rgba(17, 20, 28, 0.95)",
        }
    }
}

/// How a new theme reaches the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSwitch {
    Instant,
    ViewTransition,
}

impl ThemeSwitch {
    /// Only user toggles cross-fade, and only when the browser can and the
    /// user has not asked for reduced motion.
    pub fn choose(toggled: bool, reduced_motion: bool, transitions_supported: bool) -> Self {
        if toggled && !reduced_motion && transitions_supported {
            Self::ViewTransition
        } else {
            Self::Instant
        }
    }
}

/// Key-value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }
}

pub struct ThemeManager<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Stored preference first, then the system colour scheme.
    pub fn new(store: S, system_prefers_dark: bool) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or(if system_prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            });

        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    #[cfg(test)]
    pub fn stored(&self) -> Option<Theme> {
        self.store
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled())
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        if !self.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("could not persist theme preference `{}`", theme.as_str());
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_persisted_preference() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "dark");
        let mut manager = ThemeManager::new(store, false);
        let original = manager.stored();

        manager.toggle();
        assert_eq!(manager.stored(), Some(Theme::Light));
        manager.toggle();

        assert_eq!(manager.stored(), original);
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn stored_value_wins_over_system_preference() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "light");
        let manager = ThemeManager::new(store, true);
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn falls_back_to_system_preference_then_light() {
        let manager = ThemeManager::new(MemoryStore::default(), true);
        assert_eq!(manager.current(), Theme::Dark);

        let manager = ThemeManager::new(MemoryStore::default(), false);
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(manager.stored(), None);
    }

    #[test]
    fn unknown_stored_value_is_ignored() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "sepia");
        let manager = ThemeManager::new(store, false);
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn persisted_value_is_the_literal_theme_name() {
        let mut manager = ThemeManager::new(MemoryStore::default(), false);
        manager.toggle();
        assert_eq!(manager.store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn only_toggles_cross_fade() {
        assert_eq!(ThemeSwitch::choose(true, false, true), ThemeSwitch::ViewTransition);
        assert_eq!(ThemeSwitch::choose(false, false, true), ThemeSwitch::Instant);
        assert_eq!(ThemeSwitch::choose(true, true, true), ThemeSwitch::Instant);
        assert_eq!(ThemeSwitch::choose(true, false, false), ThemeSwitch::Instant);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert!(Theme::Dark.pressed());
        assert!(!Theme::Light.pressed());
    }
}
