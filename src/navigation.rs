use crate::config::NavConfig;

/// Id of the fixed navbar; smooth scrolling offsets targets by its height.
pub const NAVBAR_ID: &str = "navbar";

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    scrolled_threshold: f64,
    section_offset: f64,
    mobile_breakpoint: f64,
    scrolled: bool,
    active: Option<String>,
    menu_open: bool,
}

impl NavState {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            scrolled_threshold: config.scrolled_threshold,
            section_offset: config.section_offset,
            mobile_breakpoint: config.mobile_breakpoint,
            scrolled: false,
            active: config.sections.first().map(|section| section.id.clone()),
            menu_open: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Applies a scroll position. Returns true if anything visible changed.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) -> bool {
        let scrolled = scroll_y > self.scrolled_threshold;
        let active = active_section(sections, scroll_y, self.section_offset)
            .map(str::to_string)
            .or_else(|| self.active.clone());

        let changed = scrolled != self.scrolled || active != self.active;
        self.scrolled = scrolled;
        self.active = active;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    pub fn on_resize(&mut self, width: f64) -> bool {
        if width > self.mobile_breakpoint {
            self.close_menu()
        } else {
            false
        }
    }

    pub fn select(&mut self, id: &str) {
        self.active = Some(id.to_string());
        self.menu_open = false;
    }
}

/// Last section whose top, shifted up by `offset`, has been scrolled past.
/// Sections are expected in document order; above all of them the first one
/// wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - offset)
        .or_else(|| sections.first())
        .map(|section| section.id.as_str())
}

pub fn section_href(id: &str) -> String {
    format!("#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("home", 0.0), ("about", 800.0), ("work", 1_600.0), ("contact", 2_400.0)]
            .into_iter()
            .map(|(id, top)| SectionBounds {
                id: id.to_string(),
                top,
            })
            .collect()
    }

    #[test]
    fn navbar_is_scrolled_past_threshold() {
        let mut nav = NavState::new(&NavConfig::default());
        assert!(!nav.scrolled());
        nav.on_scroll(50.0, &sections());
        assert!(!nav.scrolled());
        assert!(nav.on_scroll(51.0, &sections()));
        assert!(nav.scrolled());
    }

    #[test]
    fn active_section_uses_offset() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 699.0, 100.0), Some("home"));
        assert_eq!(active_section(&sections, 700.0, 100.0), Some("about"));
        assert_eq!(active_section(&sections, 5_000.0, 100.0), Some("contact"));
    }

    #[test]
    fn first_section_is_active_above_every_section() {
        let sections = vec![SectionBounds {
            id: "about".to_string(),
            top: 900.0,
        }];
        assert_eq!(active_section(&sections, 0.0, 100.0), Some("about"));
        assert_eq!(active_section(&[], 0.0, 100.0), None);
    }

    #[test]
    fn scroll_reports_no_change_when_state_is_stable() {
        let mut nav = NavState::new(&NavConfig::default());
        nav.on_scroll(900.0, &sections());
        assert_eq!(nav.active(), Some("about"));
        assert!(!nav.on_scroll(910.0, &sections()));
    }

    #[test]
    fn mobile_menu_closes_on_link_and_wide_resize() {
        let mut nav = NavState::new(&NavConfig::default());
        assert!(nav.toggle_menu());
        nav.select("work");
        assert!(!nav.menu_open());
        assert_eq!(nav.active(), Some("work"));

        nav.toggle_menu();
        assert!(!nav.on_resize(600.0));
        assert!(nav.menu_open());
        assert!(nav.on_resize(1_024.0));
        assert!(!nav.menu_open());
    }

    #[test]
    fn href_points_at_section_anchor() {
        assert_eq!(section_href("work"), "#work");
    }
}
