use yew::prelude::*;

use super::performance::LazyImage;
use super::use_site_config;
use crate::work_filter::{filters_for, Filter, WorkFilter};

#[function_component(WorkSection)]
pub fn work_section() -> Html {
    let config = use_site_config();
    let filter = use_state(WorkFilter::default);
    let filters = use_memo(config.clone(), |config| filters_for(&config.work));

    let select = |button: Filter| {
        let filter = filter.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*filter).clone();
            next.select(button.clone());
            log::debug!("work filter set to `{}`", button.tag());
            filter.set(next);
        })
    };

    let visibility = filter.visibility(&config.work);
    html! {
        <section id="work" class="work section">
            <div class="container">
                <h2 class="section-title fade-in">{"Selected Work"}</h2>
                <div class="work-filters fade-in" role="group" aria-label="Filter work by category">
                    { for filters.iter().map(|button| {
                        let active = filter.is_button_active(button);
                        html! {
                            <button
                                type="button"
                                class={classes!("filter-btn", active.then_some("active"))}
                                data-filter={button.tag().to_string()}
                                aria-pressed={active.to_string()}
                                onclick={select(button.clone())}
                            >
                                {button.label()}
                            </button>
                        }
                    }) }
                </div>
                <div class="work-grid">
                    { for config.work.iter().zip(visibility.iter().copied()).map(|(item, visible)| {
                        html! {
                            <article
                                class="work-item scale-in"
                                data-category={item.category.clone()}
                                hidden={!visible}
                            >
                                if let Some(image) = item.image.clone() {
                                    <div class="work-image">
                                        <LazyImage src={image} alt={item.title.clone()} />
                                    </div>
                                }
                                <div class="work-info">
                                    <h3>{item.title.clone()}</h3>
                                    <p>{item.description.clone()}</p>
                                    if let Some(link) = item.link.clone() {
                                        <a
                                            href={link}
                                            class="work-link"
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            {"View project ↗"}
                                        </a>
                                    }
                                </div>
                            </article>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
