use yew::prelude::*;

use super::dom::{self, ViewportObserver};
use crate::performance::{font_preload, LazyImageState, FONT_PRELOAD_ID, LAZY_ROOT_MARGIN};
use crate::telemetry::log_event;

pub fn inject_font_preload(href: Option<&str>) {
    let Some(link) = font_preload(href) else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    if document.get_element_by_id(FONT_PRELOAD_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::debug!("no <head>, skipping font preload");
        return;
    };

    let inject = || -> Result<(), wasm_bindgen::JsValue> {
        let element = document.create_element("link")?;
        element.set_id(FONT_PRELOAD_ID);
        element.set_attribute("rel", "preload")?;
        element.set_attribute("as", "font")?;
        element.set_attribute("type", link.mime)?;
        element.set_attribute("href", &link.href)?;
        element.set_attribute("crossorigin", "anonymous")?;
        head.append_child(&element)?;
        Ok(())
    };

    if let Err(error) = inject() {
        log::warn!("font preload failed: {}", crate::error::SiteError::from(error));
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
}

/// Image whose `src` is only set once it comes near the viewport.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let image_ref = use_node_ref();
    let state = use_state(|| LazyImageState::Pending);

    {
        let image_ref = image_ref.clone();
        let state = state.clone();
        use_effect_with(props.src.clone(), move |_| {
            let mut observer = None;
            if let Some(image) = image_ref.cast::<web_sys::Element>() {
                let on_visible = state.clone();
                let on_intersect = move |_: &web_sys::Element,
                                         intersecting: bool,
                                         observer: &web_sys::IntersectionObserver| {
                    let mut next = *on_visible;
                    if intersecting && next.on_visible() {
                        on_visible.set(next);
                        observer.disconnect();
                    }
                };
                match ViewportObserver::new(0.0, LAZY_ROOT_MARGIN, on_intersect) {
                    Ok(created) => {
                        created.observe(&image);
                        observer = Some(created);
                    }
                    Err(error) => {
                        log::warn!("{error}; loading image eagerly");
                        let mut next = *state;
                        next.on_visible();
                        state.set(next);
                    }
                }
            }
            move || drop(observer)
        });
    }

    let onload = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            let mut next = *state;
            next.on_load();
            state.set(next);
        })
    };

    let onerror = {
        let state = state.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            let mut next = *state;
            next.on_error();
            state.set(next);
            log_event(
                log::Level::Warn,
                "lazy_image_failed",
                serde_json::json!({ "src": src.as_str() }),
            );
        })
    };

    let requested = *state != LazyImageState::Pending;
    html! {
        <img
            ref={image_ref}
            class={state.class()}
            data-src={props.src.clone()}
            src={requested.then(|| props.src.clone())}
            alt={props.alt.clone()}
            style={state.hidden().then_some("display: none;")}
            {onload}
            {onerror}
        />
    }
}
