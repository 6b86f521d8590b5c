pub const LAZY_ROOT_MARGIN: &str = "50px";
pub const FONT_PRELOAD_ID: &str = "font-preload";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyImageState {
    Pending,
    Loading,
    Loaded,
    Failed,
}

impl LazyImageState {
    /// Moves to `Loading` the first time the image nears the viewport.
    pub fn on_visible(&mut self) -> bool {
        if *self == Self::Pending {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    pub fn on_load(&mut self) {
        if *self == Self::Loading {
            *self = Self::Loaded;
        }
    }

    pub fn on_error(&mut self) {
        if *self == Self::Loading {
            *self = Self::Failed;
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Pending | Self::Loading => "lazy",
            Self::Loaded => "lazy loaded",
            Self::Failed => "lazy failed",
        }
    }

    pub fn hidden(self) -> bool {
        self == Self::Failed
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreloadLink {
    pub href: String,
    pub mime: &'static str,
}

pub fn font_preload(href: Option<&str>) -> Option<PreloadLink> {
    let href = href?.trim();
    if href.is_empty() {
        return None;
    }
    let mime = match href.rsplit('.').next() {
        Some("woff") => "font/woff",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",
        _ => "font/woff2",
    };
    Some(PreloadLink {
        href: href.to_string(),
        mime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_loads_once() {
        let mut state = LazyImageState::Pending;
        assert!(state.on_visible());
        assert!(!state.on_visible());
        state.on_load();
        assert_eq!(state, LazyImageState::Loaded);
        assert!(!state.on_visible());
        assert_eq!(state.class(), "lazy loaded");
    }

    #[test]
    fn failed_image_is_hidden() {
        let mut state = LazyImageState::Pending;
        state.on_visible();
        state.on_error();
        assert!(state.hidden());
        state.on_load();
        assert_eq!(state, LazyImageState::Failed);
    }

    #[test]
    fn preload_mime_follows_extension() {
        assert_eq!(
            font_preload(Some("/fonts/inter.woff2")).map(|link| link.mime),
            Some("font/woff2")
        );
        assert_eq!(
            font_preload(Some("/fonts/inter.ttf")).map(|link| link.mime),
            Some("font/ttf")
        );
        assert_eq!(font_preload(Some("  ")), None);
        assert_eq!(font_preload(None), None);
    }
}
