use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;

use super::dom;
use super::use_site_config;
use crate::cursor::{translate, CursorTrail, INTERACTIVE_SELECTOR};

const HOVER_CLASS: &str = "hover";

struct CursorFrame {
    trail: RefCell<CursorTrail>,
    cursor: Element,
    follower: Element,
    frame: RefCell<Option<AnimationFrame>>,
}

impl CursorFrame {
    fn schedule(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            view.frame.borrow_mut().take();
            view.render();
            view.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render(&self) {
        let mut trail = self.trail.borrow_mut();
        let follower = trail.step();
        dom::set_style(&self.cursor, "transform", &translate(trail.pointer()));
        dom::set_style(&self.follower, "transform", &translate(follower));
    }

    fn set_hovering(&self, hovering: bool) {
        if !self.trail.borrow_mut().set_hovering(hovering) {
            return;
        }
        for element in [&self.cursor, &self.follower] {
            let classes = element.class_list();
            let _ = if hovering {
                classes.add_1(HOVER_CLASS)
            } else {
                classes.remove_1(HOVER_CLASS)
            };
        }
    }
}

/// Running pointer-follow loop; stops the frame loop and listeners on drop.
struct CursorLoop {
    view: Rc<CursorFrame>,
    _listeners: Vec<EventListener>,
}

impl CursorLoop {
    fn start(cursor: Element, follower: Element, easing: f64) -> Option<Self> {
        let document = dom::document()?;
        let view = Rc::new(CursorFrame {
            trail: RefCell::new(CursorTrail::new(easing)),
            cursor,
            follower,
            frame: RefCell::new(None),
        });

        let on_move = {
            let view = Rc::clone(&view);
            EventListener::new(&document, "mousemove", move |event: &Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                view.trail
                    .borrow_mut()
                    .move_to(f64::from(event.client_x()), f64::from(event.client_y()));
            })
        };

        let on_over = {
            let view = Rc::clone(&view);
            EventListener::new(&document, "mouseover", move |event: &Event| {
                let hovering = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|target| target.closest(INTERACTIVE_SELECTOR).ok().flatten())
                    .is_some();
                view.set_hovering(hovering);
            })
        };

        view.schedule();
        Some(Self {
            view,
            _listeners: vec![on_move, on_over],
        })
    }
}

impl Drop for CursorLoop {
    fn drop(&mut self) {
        self.view.frame.borrow_mut().take();
    }
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let config = use_site_config();
    let enabled = use_memo((), |_| !dom::coarse_pointer());
    let cursor_ref = use_node_ref();
    let follower_ref = use_node_ref();

    {
        let cursor_ref = cursor_ref.clone();
        let follower_ref = follower_ref.clone();
        let easing = config.cursor.follow_easing;
        use_effect_with(*enabled, move |enabled| {
            let running = if *enabled {
                cursor_ref
                    .cast::<Element>()
                    .zip(follower_ref.cast::<Element>())
                    .and_then(|(cursor, follower)| CursorLoop::start(cursor, follower, easing))
            } else {
                None
            };
            move || drop(running)
        });
    }

    if !*enabled {
        return Html::default();
    }

    html! {
        <>
            <div class="cursor" ref={cursor_ref} aria-hidden="true"></div>
            <div class="cursor-follower" ref={follower_ref} aria-hidden="true"></div>
        </>
    }
}
