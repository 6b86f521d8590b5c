use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use super::dom::{self, ViewportObserver};
use crate::motion::{Debounce, Throttle};

type Slot<T> = Rc<RefCell<Option<T>>>;

/// Current `scrollY`, refreshed at most once per `throttle_ms` plus one
/// trailing update so the final position is never lost.
#[hook]
pub fn use_scroll_y(throttle_ms: u32) -> f64 {
    let scroll_y = use_state(dom::scroll_y);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with(throttle_ms, move |throttle_ms| {
            let throttle_ms = *throttle_ms;
            let throttle = RefCell::new(Throttle::new(throttle_ms));
            let trailing: Slot<Timeout> = Rc::default();

            let listener = window().map(|win| {
                let trailing = Rc::clone(&trailing);
                EventListener::new(&win, "scroll", move |_| {
                    if throttle.borrow_mut().ready(dom::now_ms()) {
                        scroll_y.set(dom::scroll_y());
                        return;
                    }
                    let scroll_y = scroll_y.clone();
                    let timeout = Timeout::new(throttle_ms, move || scroll_y.set(dom::scroll_y()));
                    *trailing.borrow_mut() = Some(timeout);
                })
            });

            move || {
                drop(listener);
                trailing.borrow_mut().take();
            }
        });
    }

    *scroll_y
}

fn arm_settle(
    delay_ms: u32,
    debounce: Rc<RefCell<Debounce>>,
    pending: Slot<Timeout>,
    on_settled: Callback<f64>,
) {
    let slot = Rc::clone(&pending);
    let timeout = Timeout::new(delay_ms, move || {
        let now = dom::now_ms();
        if debounce.borrow_mut().fire_due(now) {
            on_settled.emit(dom::viewport_size().width);
            return;
        }
        let remaining = debounce.borrow().remaining_ms(now);
        if let Some(remaining) = remaining {
            arm_settle(remaining.ceil() as u32, debounce, pending, on_settled);
        }
    });
    *slot.borrow_mut() = Some(timeout);
}

/// Calls `on_settled` with the viewport width once resizing has been quiet
/// for `wait_ms`.
#[hook]
pub fn use_debounced_resize(wait_ms: u32, on_settled: Callback<f64>) {
    use_effect_with((wait_ms, on_settled), move |(wait_ms, on_settled)| {
        let wait_ms = *wait_ms;
        let on_settled = on_settled.clone();
        let debounce = Rc::new(RefCell::new(Debounce::new(wait_ms)));
        let pending: Slot<Timeout> = Rc::default();

        let listener = window().map(|win| {
            let pending = Rc::clone(&pending);
            EventListener::new(&win, "resize", move |_| {
                debounce.borrow_mut().touch(dom::now_ms());
                arm_settle(
                    wait_ms,
                    Rc::clone(&debounce),
                    Rc::clone(&pending),
                    on_settled.clone(),
                );
            })
        });

        move || {
            drop(listener);
            pending.borrow_mut().take();
        }
    });
}

/// Flips to true the first time `node` reaches `threshold` visibility and
/// stays true.
#[hook]
pub fn use_in_view_once(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with(node, move |node| {
            let mut observer = None;
            if let Some(element) = node.cast::<web_sys::Element>() {
                let on_seen = seen.clone();
                match ViewportObserver::new(threshold, "0px", move |_, intersecting, observer| {
                    if intersecting {
                        on_seen.set(true);
                        observer.disconnect();
                    }
                }) {
                    Ok(created) => {
                        created.observe(&element);
                        observer = Some(created);
                    }
                    Err(error) => {
                        log::warn!("{error}; revealing without observer");
                        seen.set(true);
                    }
                }
            }
            move || drop(observer)
        });
    }

    *seen
}
