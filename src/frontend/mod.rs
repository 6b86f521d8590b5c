mod contact;
mod cursor;
mod dom;
mod hero;
mod hooks;
mod loading_screen;
mod navbar;
mod notification;
mod performance;
mod reveal;
mod sections;
mod work;

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::telemetry::{self, log_event, LogLevel};
use crate::theme::ThemeManager;

use contact::ContactSection;
use cursor::CustomCursor;
use hero::Hero;
use loading_screen::LoadingScreen;
use navbar::Navbar;
use notification::Toaster;
use sections::{AboutSection, SkillsSection};
use work::WorkSection;

#[hook]
fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<SiteConfig>,
}

#[function_component(Footer)]
fn footer() -> Html {
    let config = use_site_config();
    let profile = &config.profile;

    html! {
        <footer class="footer">
            <div class="footer-content">
                <p>{format!("© {} · {}", profile.name, profile.location)}</p>
                <ul class="social-links">
                    { for profile.socials.iter().map(|social| html! {
                        <li>
                            <a href={social.href.clone()} target="_blank" rel="noopener noreferrer">
                                {social.label.clone()}
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </footer>
    }
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let manager = use_mut_ref(|| ThemeManager::new(dom::LocalStorage, dom::system_prefers_dark()));
    let theme = {
        let manager = manager.clone();
        use_state(move || manager.borrow().current())
    };

    {
        let current = *theme;
        use_effect_with((), move |_| {
            dom::apply_theme(current, false);
            || ()
        });
    }

    {
        let config = props.config.clone();
        use_effect_with((), move |_| {
            performance::inject_font_preload(config.performance.font_preload.as_deref());
            let reveal = reveal::ScrollReveal::install(config.reveal.stagger_ms)
                .map_err(|error| log::warn!("scroll animations disabled: {error}"))
                .ok()
                .flatten();
            move || drop(reveal)
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = manager.borrow_mut().toggle();
            dom::apply_theme(next, true);
            if let Err(error) = dom::dispatch(dom::THEME_CHANGED_EVENT, Some(next.as_str())) {
                log::warn!("{error}");
            }
            log_event(
                log::Level::Info,
                "theme_changed",
                serde_json::json!({ "theme": next.as_str() }),
            );
            theme.set(next);
        })
    };

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <Toaster>
                <LoadingScreen />
                <CustomCursor />
                <Navbar theme={*theme} on_toggle_theme={on_toggle_theme} />
                <main id="content">
                    <Hero />
                    <AboutSection />
                    <SkillsSection />
                    <WorkSection />
                    <ContactSection />
                </main>
                <Footer />
            </Toaster>
        </ContextProvider<Rc<SiteConfig>>>
    }
}

pub fn run() {
    let loaded = SiteConfig::load_embedded();
    telemetry::init(
        loaded
            .as_ref()
            .map(|config| config.log_level)
            .unwrap_or(LogLevel::Info),
    );
    let config = loaded.unwrap_or_else(|error| {
        log::error!("{error}; falling back to built-in defaults");
        SiteConfig::default()
    });

    let Some(document) = window().and_then(|w| w.document()) else {
        log::error!("no document available, nothing to mount");
        return;
    };
    let root = document
        .get_element_by_id("app")
        .or_else(|| document.body().map(Into::into));
    let Some(root) = root else {
        log::error!("no #app mount point or body");
        return;
    };

    log_event(
        log::Level::Debug,
        "app_mount",
        serde_json::json!({ "work_items": config.work.len() }),
    );

    yew::Renderer::<App>::with_root_and_props(
        root,
        AppProps {
            config: Rc::new(config),
        },
    )
    .render();
}
