use serde::Deserialize;

use crate::error::SiteError;
use crate::telemetry::LogLevel;

const EMBEDDED_SITE_CONFIG: &str = include_str!("../config/site.json");

const DEFAULT_LOADING_DURATION_MS: u32 = 2_000;
const DEFAULT_LOADING_FADE_MS: u32 = 500;
const DEFAULT_FOLLOW_EASING: f64 = 0.1;
const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;
const DEFAULT_SECTION_OFFSET: f64 = 100.0;
const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
const DEFAULT_SCROLL_THROTTLE_MS: u32 = 16;
const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
const DEFAULT_TYPING_SPEED_MS: u32 = 100;
const DEFAULT_DELETING_SPEED_MS: u32 = 50;
const DEFAULT_PAUSE_MS: u32 = 2_000;
const DEFAULT_NEXT_PHRASE_DELAY_MS: u32 = 500;
const DEFAULT_PARALLAX_BASE: f64 = 0.5;
const DEFAULT_PARALLAX_STEP: f64 = 0.1;
const DEFAULT_SHAPES: usize = 4;
const DEFAULT_REVEAL_STAGGER_MS: u32 = 100;
const DEFAULT_STATS_DURATION_MS: u32 = 2_000;
const DEFAULT_SKILLS_STAGGER_MS: u32 = 200;
const DEFAULT_SEND_DELAY_MS: u32 = 1_500;
const DEFAULT_NOTIFICATION_LIFETIME_MS: u32 = 5_000;

const LOADING_DURATION_MS_BOUNDS: (u32, u32) = (0, 10_000);
const LOADING_FADE_MS_BOUNDS: (u32, u32) = (0, 5_000);
const FOLLOW_EASING_BOUNDS: (f64, f64) = (0.01, 1.0);
const SCROLLED_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const SECTION_OFFSET_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const MOBILE_BREAKPOINT_BOUNDS: (f64, f64) = (320.0, 2_560.0);
const SCROLL_THROTTLE_MS_BOUNDS: (u32, u32) = (0, 1_000);
const RESIZE_DEBOUNCE_MS_BOUNDS: (u32, u32) = (0, 5_000);
const TYPING_SPEED_MS_BOUNDS: (u32, u32) = (10, 2_000);
const PAUSE_MS_BOUNDS: (u32, u32) = (0, 30_000);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 2.0);
const SHAPES_BOUNDS: (usize, usize) = (0, 12);
const STAGGER_MS_BOUNDS: (u32, u32) = (0, 2_000);
const STATS_DURATION_MS_BOUNDS: (u32, u32) = (100, 10_000);
const SEND_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const NOTIFICATION_LIFETIME_MS_BOUNDS: (u32, u32) = (500, 60_000);

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub profile: Profile,
    pub loading: LoadingConfig,
    pub cursor: CursorConfig,
    pub nav: NavConfig,
    pub hero: HeroConfig,
    pub reveal: RevealConfig,
    pub stats: StatsConfig,
    pub skills: SkillsConfig,
    pub work: Vec<WorkItem>,
    pub contact: ContactConfig,
    pub notification: NotificationConfig,
    pub performance: PerformanceConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub email: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub duration_ms: u32,
    pub fade_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub follow_easing: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub scrolled_threshold: f64,
    pub section_offset: f64,
    pub mobile_breakpoint: f64,
    pub scroll_throttle_ms: u32,
    pub resize_debounce_ms: u32,
    pub sections: Vec<NavSection>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub phrases: Vec<String>,
    pub typing_speed_ms: u32,
    pub deleting_speed_ms: u32,
    pub pause_ms: u32,
    pub next_phrase_delay_ms: u32,
    pub parallax_base: f64,
    pub parallax_step: f64,
    pub shapes: usize,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub stagger_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub duration_ms: u32,
    pub items: Vec<StatItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub stagger_ms: u32,
    pub items: Vec<SkillItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WorkItem {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub send_delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub lifetime_ms: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub font_preload: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            profile: Profile::default(),
            loading: LoadingConfig::default(),
            cursor: CursorConfig::default(),
            nav: NavConfig::default(),
            hero: HeroConfig::default(),
            reveal: RevealConfig::default(),
            stats: StatsConfig::default(),
            skills: SkillsConfig::default(),
            work: Vec::new(),
            contact: ContactConfig::default(),
            notification: NotificationConfig::default(),
            performance: PerformanceConfig::default(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            role: "Full-Stack Developer".to_string(),
            tagline: String::new(),
            about: Vec::new(),
            email: String::new(),
            location: String::new(),
            socials: Vec::new(),
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_LOADING_DURATION_MS,
            fade_ms: DEFAULT_LOADING_FADE_MS,
        }
    }
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            follow_easing: DEFAULT_FOLLOW_EASING,
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        let sections = [
            ("home", "Home"),
            ("about", "About"),
            ("skills", "Skills"),
            ("work", "Work"),
            ("contact", "Contact"),
        ]
        .into_iter()
        .map(|(id, label)| NavSection {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect();

        Self {
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            section_offset: DEFAULT_SECTION_OFFSET,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            sections,
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            phrases: vec!["Full-Stack Developer".to_string()],
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            deleting_speed_ms: DEFAULT_DELETING_SPEED_MS,
            pause_ms: DEFAULT_PAUSE_MS,
            next_phrase_delay_ms: DEFAULT_NEXT_PHRASE_DELAY_MS,
            parallax_base: DEFAULT_PARALLAX_BASE,
            parallax_step: DEFAULT_PARALLAX_STEP,
            shapes: DEFAULT_SHAPES,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_STATS_DURATION_MS,
            items: Vec::new(),
        }
    }
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            stagger_ms: DEFAULT_SKILLS_STAGGER_MS,
            items: Vec::new(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: DEFAULT_SEND_DELAY_MS,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: DEFAULT_NOTIFICATION_LIFETIME_MS,
        }
    }
}

impl Profile {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

impl SiteConfig {
    /// Parses the configuration compiled into the binary.
    pub fn load_embedded() -> Result<Self, SiteError> {
        Self::from_json(EMBEDDED_SITE_CONFIG)
    }

    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.loading.duration_ms = within_bounds(
            self.loading.duration_ms,
            DEFAULT_LOADING_DURATION_MS,
            LOADING_DURATION_MS_BOUNDS,
        );
        self.loading.fade_ms = within_bounds(
            self.loading.fade_ms,
            DEFAULT_LOADING_FADE_MS,
            LOADING_FADE_MS_BOUNDS,
        );
        self.cursor.follow_easing = within_bounds(
            self.cursor.follow_easing,
            DEFAULT_FOLLOW_EASING,
            FOLLOW_EASING_BOUNDS,
        );

        let nav = &mut self.nav;
        nav.scrolled_threshold = within_bounds(
            nav.scrolled_threshold,
            DEFAULT_SCROLLED_THRESHOLD,
            SCROLLED_THRESHOLD_BOUNDS,
        );
        nav.section_offset = within_bounds(
            nav.section_offset,
            DEFAULT_SECTION_OFFSET,
            SECTION_OFFSET_BOUNDS,
        );
        nav.mobile_breakpoint = within_bounds(
            nav.mobile_breakpoint,
            DEFAULT_MOBILE_BREAKPOINT,
            MOBILE_BREAKPOINT_BOUNDS,
        );
        nav.scroll_throttle_ms = within_bounds(
            nav.scroll_throttle_ms,
            DEFAULT_SCROLL_THROTTLE_MS,
            SCROLL_THROTTLE_MS_BOUNDS,
        );
        nav.resize_debounce_ms = within_bounds(
            nav.resize_debounce_ms,
            DEFAULT_RESIZE_DEBOUNCE_MS,
            RESIZE_DEBOUNCE_MS_BOUNDS,
        );

        let hero = &mut self.hero;
        hero.phrases.retain(|phrase| !phrase.trim().is_empty());
        hero.typing_speed_ms = within_bounds(
            hero.typing_speed_ms,
            DEFAULT_TYPING_SPEED_MS,
            TYPING_SPEED_MS_BOUNDS,
        );
        hero.deleting_speed_ms = within_bounds(
            hero.deleting_speed_ms,
            DEFAULT_DELETING_SPEED_MS,
            TYPING_SPEED_MS_BOUNDS,
        );
        hero.pause_ms = within_bounds(hero.pause_ms, DEFAULT_PAUSE_MS, PAUSE_MS_BOUNDS);
        hero.next_phrase_delay_ms = within_bounds(
            hero.next_phrase_delay_ms,
            DEFAULT_NEXT_PHRASE_DELAY_MS,
            PAUSE_MS_BOUNDS,
        );
        hero.parallax_base = within_bounds(
            hero.parallax_base,
            DEFAULT_PARALLAX_BASE,
            PARALLAX_FACTOR_BOUNDS,
        );
        hero.parallax_step = within_bounds(
            hero.parallax_step,
            DEFAULT_PARALLAX_STEP,
            PARALLAX_FACTOR_BOUNDS,
        );
        hero.shapes = within_bounds(hero.shapes, DEFAULT_SHAPES, SHAPES_BOUNDS);

        self.reveal.stagger_ms = within_bounds(
            self.reveal.stagger_ms,
            DEFAULT_REVEAL_STAGGER_MS,
            STAGGER_MS_BOUNDS,
        );
        self.stats.duration_ms = within_bounds(
            self.stats.duration_ms,
            DEFAULT_STATS_DURATION_MS,
            STATS_DURATION_MS_BOUNDS,
        );
        self.skills.stagger_ms = within_bounds(
            self.skills.stagger_ms,
            DEFAULT_SKILLS_STAGGER_MS,
            STAGGER_MS_BOUNDS,
        );
        self.contact.send_delay_ms = within_bounds(
            self.contact.send_delay_ms,
            DEFAULT_SEND_DELAY_MS,
            SEND_DELAY_MS_BOUNDS,
        );
        self.notification.lifetime_ms = within_bounds(
            self.notification.lifetime_ms,
            DEFAULT_NOTIFICATION_LIFETIME_MS,
            NOTIFICATION_LIFETIME_MS_BOUNDS,
        );
        self.performance.font_preload = self
            .performance
            .font_preload
            .take()
            .map(|href| href.trim().to_string())
            .filter(|href| !href.is_empty());

        self
    }
}

fn within_bounds<T: PartialOrd>(value: T, default: T, bounds: (T, T)) -> T {
    if (bounds.0..=bounds.1).contains(&value) {
        value
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::from_json(EMBEDDED_SITE_CONFIG).expect("embedded config");
        assert!(!config.hero.phrases.is_empty());
        assert!(!config.work.is_empty());
        assert_eq!(config.loading.duration_ms, 2_000);
    }

    #[test]
    fn displayed_role_is_spelled_correctly() {
        let config = SiteConfig::from_json(EMBEDDED_SITE_CONFIG).expect("embedded config");
        assert_eq!(config.profile.role, "Full-Stack Developer");
        assert!(config
            .hero
            .phrases
            .iter()
            .all(|phrase| !phrase.contains("Develepor")));
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config = SiteConfig::from_json(r#"{ "hero": { "phrases": ["Hi"] } }"#)
            .expect("partial config");
        assert_eq!(config.hero.phrases, vec!["Hi".to_string()]);
        assert_eq!(config.hero.typing_speed_ms, DEFAULT_TYPING_SPEED_MS);
        assert_eq!(config.nav.sections.len(), 5);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn out_of_range_values_fall_back_to_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "loading": { "duration_ms": 999999, "fade_ms": 300 },
                "cursor": { "follow_easing": 4.0 },
                "hero": { "typing_speed_ms": 1, "shapes": 100 }
            }"#,
        )
        .expect("config");

        assert_eq!(config.loading.duration_ms, DEFAULT_LOADING_DURATION_MS);
        assert_eq!(config.loading.fade_ms, 300);
        assert_eq!(config.cursor.follow_easing, DEFAULT_FOLLOW_EASING);
        assert_eq!(config.hero.typing_speed_ms, DEFAULT_TYPING_SPEED_MS);
        assert_eq!(config.hero.shapes, DEFAULT_SHAPES);
    }

    #[test]
    fn embedded_assets_ship_with_the_site() {
        let config = SiteConfig::from_json(EMBEDDED_SITE_CONFIG).expect("embedded config");
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let referenced = config
            .work
            .iter()
            .filter_map(|item| item.image.as_deref())
            .chain(config.performance.font_preload.as_deref());

        for href in referenced {
            let path = public.join(href.trim_start_matches('/'));
            assert!(path.is_file(), "{href} is not under public/");
        }
    }

    #[test]
    fn blank_phrases_and_font_preload_are_dropped() {
        let config = SiteConfig::from_json(
            r#"{
                "hero": { "phrases": ["", "  ", "Builder"] },
                "performance": { "font_preload": "   " }
            }"#,
        )
        .expect("config");

        assert_eq!(config.hero.phrases, vec!["Builder".to_string()]);
        assert_eq!(config.performance.font_preload, None);
    }

    #[test]
    fn initials_take_first_two_words() {
        let profile = Profile {
            name: "Alex Jordan Morgan".to_string(),
            ..Profile::default()
        };
        assert_eq!(profile.initials(), "AJ");

        let blank = Profile {
            name: "  ".to_string(),
            ..Profile::default()
        };
        assert_eq!(blank.initials(), "");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let error = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(error, SiteError::Config(_)));
    }
}
