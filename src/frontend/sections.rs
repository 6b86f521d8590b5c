use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use yew::prelude::*;

use super::dom;
use super::hooks::use_in_view_once;
use super::use_site_config;
use crate::config::StatItem;
use crate::counters::{
    format_stat, skill_bar_style, skill_width, CountUp, COUNTER_TICK_MS,
    SKILLS_VISIBILITY_THRESHOLD, STATS_VISIBILITY_THRESHOLD,
};

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: StatItem,
    duration_ms: u32,
    active: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state(|| 0_u32);

    {
        let value = value.clone();
        let counter = CountUp::new(props.stat.value, props.duration_ms);
        use_effect_with(props.active, move |active| {
            let ticker: Rc<RefCell<Option<Interval>>> = Rc::default();
            if *active {
                let started = dom::now_ms();
                let slot = Rc::clone(&ticker);
                let interval = Interval::new(COUNTER_TICK_MS, move || {
                    let elapsed = dom::now_ms() - started;
                    value.set(counter.value_at(elapsed));
                    if counter.is_finished(elapsed) {
                        slot.borrow_mut().take();
                    }
                });
                *ticker.borrow_mut() = Some(interval);
            }
            move || {
                ticker.borrow_mut().take();
            }
        });
    }

    html! {
        <div class="stat-item">
            <span class="stat-number" data-target={props.stat.value.to_string()}>
                {format_stat(*value, &props.stat.suffix)}
            </span>
            <span class="stat-label">{props.stat.label.clone()}</span>
        </div>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let config = use_site_config();
    let stats_ref = use_node_ref();
    let counting = use_in_view_once(stats_ref.clone(), STATS_VISIBILITY_THRESHOLD);

    html! {
        <section id="about" class="about section">
            <div class="container">
                <h2 class="section-title fade-in">{"About Me"}</h2>
                <div class="about-content">
                    <div class="about-text slide-in-left">
                        { for config.profile.about.iter().map(|paragraph| html! {
                            <p>{paragraph.clone()}</p>
                        }) }
                    </div>
                    <div class="stats slide-in-right" ref={stats_ref}>
                        { for config.stats.items.iter().map(|stat| html! {
                            <StatCounter
                                stat={stat.clone()}
                                duration_ms={config.stats.duration_ms}
                                active={counting}
                            />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    let config = use_site_config();
    let skills_ref = use_node_ref();
    let filled = use_in_view_once(skills_ref.clone(), SKILLS_VISIBILITY_THRESHOLD);
    let stagger_ms = config.skills.stagger_ms;

    html! {
        <section id="skills" class="skills-section section">
            <div class="container">
                <h2 class="section-title fade-in">{"Skills"}</h2>
                <div class="skills" ref={skills_ref}>
                    { for config.skills.items.iter().enumerate().map(|(index, skill)| html! {
                        <div class="skill-item fade-in">
                            <div class="skill-info">
                                <span class="skill-name">{skill.name.clone()}</span>
                                <span class="skill-level">
                                    {format!("{}%", skill_width(skill.level))}
                                </span>
                            </div>
                            <div class="skill-bar">
                                <div
                                    class="skill-progress"
                                    data-width={skill_width(skill.level).to_string()}
                                    style={skill_bar_style(skill.level, index, stagger_ms, filled)}
                                ></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
