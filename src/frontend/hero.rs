use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::dom;
use super::hooks::use_scroll_y;
use super::use_site_config;
use crate::hero::{parallax_offset, Typewriter};

#[function_component(TypingText)]
fn typing_text() -> Html {
    let config = use_site_config();
    let typewriter = use_mut_ref(|| Typewriter::new(&config.hero));
    let text = use_state(String::new);
    let tick = use_state(|| 0_u64);

    {
        let text = text.clone();
        let tick = tick.clone();
        use_effect_with(*tick, move |current| {
            let next_tick = current + 1;
            let timeout = typewriter.borrow_mut().step().map(|step| {
                text.set(step.text);
                Timeout::new(step.delay_ms, move || tick.set(next_tick))
            });
            move || drop(timeout)
        });
    }

    html! {
        <span class="typing-wrapper">
            <span class="typing-text">{(*text).clone()}</span>
            <span class="typing-cursor" aria-hidden="true">{"|"}</span>
        </span>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_site_config();
    let scroll_y = use_scroll_y(config.nav.scroll_throttle_ms);
    let parallax = use_memo((), |_| !dom::prefers_reduced_motion());
    let profile = &config.profile;

    let scroll_to = |id: &'static str| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dom::smooth_scroll_to(id);
        })
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting fade-in">{"Hello, I'm"}</p>
                <h1 class="hero-title fade-in">
                    <span class="highlight">{profile.name.clone()}</span>
                </h1>
                <p class="hero-subtitle fade-in" aria-label={profile.role.clone()}>
                    <TypingText />
                </p>
                <p class="hero-description fade-in">{profile.tagline.clone()}</p>
                <div class="hero-buttons fade-in">
                    <a href="#work" class="btn btn-primary" onclick={scroll_to("work")}>
                        {"View My Work"}
                    </a>
                    <a href="#contact" class="btn btn-secondary" onclick={scroll_to("contact")}>
                        {"Get In Touch"}
                    </a>
                </div>
            </div>
            <div class="hero-shapes" aria-hidden="true">
                { for (0..config.hero.shapes).map(|index| {
                    let offset = if *parallax {
                        parallax_offset(scroll_y, index, &config.hero)
                    } else {
                        0.0
                    };
                    html! {
                        <div
                            class={classes!("shape", format!("shape-{}", index + 1))}
                            style={format!("transform: translateY({offset:.1}px);")}
                        ></div>
                    }
                }) }
            </div>
        </section>
    }
}
