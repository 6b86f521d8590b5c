use yew::prelude::*;

use super::dom;
use super::hooks::{use_debounced_resize, use_scroll_y};
use super::use_site_config;
use crate::navigation::{section_href, NavState, NAVBAR_ID};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let config = use_site_config();
    let nav = use_mut_ref(|| NavState::new(&config.nav));
    let view = use_state(|| nav.borrow().clone());
    let scroll_y = use_scroll_y(config.nav.scroll_throttle_ms);

    {
        let nav = nav.clone();
        let view = view.clone();
        let config = config.clone();
        use_effect_with(scroll_y, move |scroll_y| {
            let bounds =
                dom::section_bounds(config.nav.sections.iter().map(|section| section.id.as_str()));
            if nav.borrow_mut().on_scroll(*scroll_y, &bounds) {
                view.set(nav.borrow().clone());
            }
            || ()
        });
    }

    let on_resize = {
        let nav = nav.clone();
        let view = view.clone();
        use_callback((), move |width: f64, _| {
            if nav.borrow_mut().on_resize(width) {
                view.set(nav.borrow().clone());
            }
        })
    };
    use_debounced_resize(config.nav.resize_debounce_ms, on_resize);

    let go_to = {
        let nav = nav.clone();
        let view = view.clone();
        move |id: String| {
            let nav = nav.clone();
            let view = view.clone();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                nav.borrow_mut().select(&id);
                view.set(nav.borrow().clone());
                dom::smooth_scroll_to(&id);
            })
        }
    };

    let on_hamburger = {
        let nav = nav.clone();
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            nav.borrow_mut().toggle_menu();
            view.set(nav.borrow().clone());
        })
    };

    let on_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let theme = props.theme;
    let menu_open = view.menu_open();
    let navbar_style = view
        .scrolled()
        .then(|| format!("background: {};", theme.navbar_background()));
    let home_id = config
        .nav
        .sections
        .first()
        .map(|section| section.id.clone())
        .unwrap_or_else(|| "home".to_string());

    html! {
        <nav
            id={NAVBAR_ID}
            class={classes!("navbar", view.scrolled().then_some("scrolled"))}
            style={navbar_style}
        >
            <div class="nav-container">
                <a href={section_href(&home_id)} class="nav-logo" onclick={go_to(home_id.clone())}>
                    {config.profile.initials()}
                </a>
                <ul class={classes!("nav-menu", menu_open.then_some("active"))}>
                    { for config.nav.sections.iter().map(|section| {
                        let active = view.active() == Some(section.id.as_str());
                        html! {
                            <li class="nav-item">
                                <a
                                    href={section_href(&section.id)}
                                    class={classes!("nav-link", active.then_some("active"))}
                                    aria-current={active.then_some("page")}
                                    onclick={go_to(section.id.clone())}
                                >
                                    {section.label.clone()}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={theme.toggle_label()}
                        aria-pressed={theme.pressed().to_string()}
                        onclick={on_theme}
                    >
                        <span aria-hidden="true">{theme.icon()}</span>
                    </button>
                    <button
                        class={classes!("hamburger", menu_open.then_some("active"))}
                        type="button"
                        aria-label="Toggle navigation"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_hamburger}
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
