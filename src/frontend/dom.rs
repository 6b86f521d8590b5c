use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, CustomEvent, CustomEventInit, Document, Element, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Storage,
};

use crate::error::SiteError;
use crate::motion::{is_in_viewport, Rect, Viewport};
use crate::navigation::{SectionBounds, NAVBAR_ID};
use crate::theme::{PreferenceStore, Theme, ThemeSwitch};

pub const LOAD_COMPLETE_EVENT: &str = "portfolio:load-complete";
pub const THEME_CHANGED_EVENT: &str = "portfolio:theme-changed";

pub fn document() -> Option<Document> {
    window()?.document()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        local_storage()
            .map(|storage| storage.set_item(key, value).is_ok())
            .unwrap_or(false)
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn coarse_pointer() -> bool {
    media_matches("(pointer: coarse)")
}

fn write_theme(theme: Theme) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
    set_style(&root, "color-scheme", theme.as_str());
}

/// `document.startViewTransition`, when the browser has it.
fn view_transition() -> Option<(JsValue, Function)> {
    let document: JsValue = document()?.into();
    let start = Reflect::get(&document, &JsValue::from_str("startViewTransition")).ok()?;
    let start = start.dyn_into::<Function>().ok()?;
    Some((document, start))
}

/// Writes `data-theme` and `color-scheme` on the root element. Toggles
/// cross-fade through a view transition when `ThemeSwitch` allows it.
pub fn apply_theme(theme: Theme, toggled: bool) {
    let transition = if toggled { view_transition() } else { None };
    let switch = ThemeSwitch::choose(toggled, prefers_reduced_motion(), transition.is_some());

    match (switch, transition) {
        (ThemeSwitch::ViewTransition, Some((document, start))) => {
            let update = Closure::once_into_js(move || write_theme(theme));
            if start.call1(&document, &update).is_err() {
                write_theme(theme);
            }
        }
        _ => write_theme(theme),
    }
}

pub fn dispatch(name: &str, detail: Option<&str>) -> Result<(), SiteError> {
    let target = window().ok_or_else(|| SiteError::Browser("no window".to_string()))?;
    let init = CustomEventInit::new();
    if let Some(detail) = detail {
        init.set_detail(&JsValue::from_str(detail));
    }
    let event = CustomEvent::new_with_event_init_dict(name, &init)?;
    target.dispatch_event(&event)?;
    Ok(())
}

pub fn add_body_class(class: &str) -> Result<(), SiteError> {
    let body = document()
        .and_then(|d| d.body())
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))?;
    body.class_list().add_1(class)?;
    Ok(())
}

pub fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

pub fn viewport_size() -> Viewport {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };
    let measure = |value: Result<JsValue, JsValue>, fallback: f64| {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(fallback)
    };
    Viewport {
        width: measure(win.inner_width(), FALLBACK_VIEWPORT.width),
        height: measure(win.inner_height(), FALLBACK_VIEWPORT.height),
    }
}

pub fn element_in_viewport(element: &Element) -> bool {
    let bounds = element.get_bounding_client_rect();
    is_in_viewport(
        Rect {
            top: bounds.top(),
            left: bounds.left(),
            bottom: bounds.bottom(),
            right: bounds.right(),
        },
        viewport_size(),
    )
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, SiteError> {
    let Some(document) = document() else {
        return Ok(Vec::new());
    };
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Document offsets of the given section ids; missing sections are skipped.
pub fn section_bounds<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<SectionBounds> {
    let Some(document) = document() else {
        return Vec::new();
    };
    ids.into_iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?;
            let element = element.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id: id.to_string(),
                top: f64::from(element.offset_top()),
            })
        })
        .collect()
}

fn navbar_height(document: &Document) -> f64 {
    document
        .get_element_by_id(NAVBAR_ID)
        .and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok())
        .map(|navbar| f64::from(navbar.offset_height()))
        .unwrap_or(0.0)
}

/// Scrolls so that section `id` starts just below the fixed navbar.
pub fn smooth_scroll_to(id: &str) {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = document() else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("scroll target #{id} not found");
        return;
    };

    let top = crate::motion::scroll_target(
        target.get_bounding_client_rect().top(),
        scroll_y(),
        navbar_height(&document),
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owned intersection observer; disconnects when dropped.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportObserver {
    pub fn new<F>(threshold: f64, root_margin: &str, mut handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(&Element, bool, &IntersectionObserver) + 'static,
    {
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    handler(&entry.target(), entry.is_intersecting(), &observer);
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
