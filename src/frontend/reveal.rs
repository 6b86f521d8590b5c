use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::dom::{self, ViewportObserver};
use crate::error::SiteError;
use crate::reveal::{
    on_intersection, reveal_selector, RevealTracker, ANIMATED_CLASS, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD,
};

const REVEAL_KEY_ATTRIBUTE: &str = "data-reveal-key";

fn reveal_key(element: &Element) -> Option<usize> {
    element
        .get_attribute(REVEAL_KEY_ATTRIBUTE)
        .and_then(|value| value.parse().ok())
}

fn sibling_index(element: &Element, selector: &str) -> usize {
    let mut index = 0;
    let mut current = element.previous_element_sibling();
    while let Some(sibling) = current {
        if sibling.matches(selector).unwrap_or(false) {
            index += 1;
        }
        current = sibling.previous_element_sibling();
    }
    index
}

fn animate(tracker: &RefCell<RevealTracker<usize>>, element: &Element, selector: &str) -> bool {
    let Some(key) = reveal_key(element) else {
        return false;
    };
    let index = sibling_index(element, selector);
    let Some(delay_ms) = on_intersection(&mut *tracker.borrow_mut(), key, index, true) else {
        return false;
    };
    dom::set_style(element, "transition-delay", &format!("{delay_ms}ms"));
    let _ = element.class_list().add_1(ANIMATED_CLASS);
    true
}

/// Reveal-on-scroll for every element carrying one of the reveal classes.
pub struct ScrollReveal {
    _observer: ViewportObserver,
}

impl ScrollReveal {
    pub fn install(stagger_ms: u32) -> Result<Option<Self>, SiteError> {
        let selector = reveal_selector();
        let targets = dom::query_all(&selector)?;
        if targets.is_empty() {
            return Ok(None);
        }

        for (key, element) in targets.iter().enumerate() {
            element.set_attribute(REVEAL_KEY_ATTRIBUTE, &key.to_string())?;
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new(stagger_ms)));
        let observer = {
            let tracker = Rc::clone(&tracker);
            let selector = selector.clone();
            ViewportObserver::new(
                REVEAL_THRESHOLD,
                REVEAL_ROOT_MARGIN,
                move |element, intersecting, observer| {
                    if intersecting && animate(&tracker, element, &selector) {
                        observer.unobserve(element);
                    }
                },
            )?
        };

        let mut revealed_now = 0;
        for element in &targets {
            if dom::element_in_viewport(element) && animate(&tracker, element, &selector) {
                revealed_now += 1;
            } else {
                observer.observe(element);
            }
        }
        log::debug!(
            "scroll reveal watching {} elements ({revealed_now} already visible)",
            targets.len()
        );

        Ok(Some(Self {
            _observer: observer,
        }))
    }
}
