use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::dom;
use super::use_site_config;
use crate::loading::{LoadingPhase, LoadingSequence};
use crate::telemetry::log_event;

const LOADED_BODY_CLASS: &str = "loaded";

fn signal_load_complete(sequence: &LoadingSequence) {
    if let Err(error) = dom::add_body_class(LOADED_BODY_CLASS) {
        log::warn!("{error}");
    }
    if let Err(error) = dom::dispatch(dom::LOAD_COMPLETE_EVENT, None) {
        log::warn!("{error}");
    }
    log_event(
        log::Level::Info,
        "load_complete",
        serde_json::json!({ "duration_ms": sequence.duration_ms() }),
    );
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let config = use_site_config();
    let sequence = use_mut_ref(|| LoadingSequence::new(&config.loading));
    let phase = use_state(|| LoadingPhase::Showing);

    {
        let sequence = sequence.clone();
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let fade_timer: Rc<RefCell<Option<Timeout>>> = Rc::default();
            let progress_ms = sequence.borrow().next_delay().unwrap_or_default();

            let progress_timer = {
                let fade_timer = Rc::clone(&fade_timer);
                Timeout::new(progress_ms, move || {
                    if sequence.borrow_mut().finish_progress() {
                        signal_load_complete(&sequence.borrow());
                    }
                    phase.set(sequence.borrow().phase());

                    let fade_ms = sequence.borrow().next_delay().unwrap_or_default();
                    let fade = Timeout::new(fade_ms, move || {
                        sequence.borrow_mut().finish_fade();
                        phase.set(LoadingPhase::Done);
                    });
                    *fade_timer.borrow_mut() = Some(fade);
                })
            };

            move || {
                drop(progress_timer);
                fade_timer.borrow_mut().take();
            }
        });
    }

    if *phase == LoadingPhase::Done {
        return Html::default();
    }

    let progress_style = format!("animation-duration: {}ms;", sequence.borrow().duration_ms());
    html! {
        <div
            id="loading-screen"
            class={classes!("loading-screen", phase.overlay_class())}
            aria-hidden="true"
        >
            <div class="loader">
                <div class="loading-logo">{config.profile.initials()}</div>
                <div class="loading-bar">
                    <div class="loading-progress" style={progress_style}></div>
                </div>
            </div>
        </div>
    }
}
