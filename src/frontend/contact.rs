use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::notification::use_notifier;
use super::use_site_config;
use crate::contact::{ContactForm, Field, SubmitState};
use crate::notification::NotificationKind;
use crate::telemetry::log_event;

const SENT_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
const INVALID_MESSAGE: &str = "Please fix the highlighted fields and try again.";

fn field_value(field: Field, event: &InputEvent) -> String {
    match field {
        Field::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
        _ => event.target_unchecked_into::<HtmlInputElement>().value(),
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let config = use_site_config();
    let notifier = use_notifier();
    let form = use_state(ContactForm::default);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*form).clone();
            next.input(field, field_value(field, &event));
            form.set(next);
        })
    };

    let on_blur = |field: Field| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur(field);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let notifier = notifier.clone();
        let send_delay_ms = config.contact.send_delay_ms;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            match next.submit() {
                Err(errors) => {
                    let fields: Vec<&str> = errors.keys().map(|field| field.id()).collect();
                    log_event(
                        log::Level::Info,
                        "contact_rejected",
                        serde_json::json!({ "fields": fields }),
                    );
                    form.set(next);
                    notifier.notify(NotificationKind::Error, INVALID_MESSAGE);
                }
                Ok(false) => {}
                Ok(true) => {
                    form.set(next);
                    let form = form.clone();
                    let notifier = notifier.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(send_delay_ms).await;
                        let mut sent = (*form).clone();
                        sent.finish_sending();
                        form.set(sent);
                        notifier.notify(NotificationKind::Success, SENT_MESSAGE);
                        log_event(
                            log::Level::Info,
                            "contact_submitted",
                            serde_json::json!({ "simulated": true }),
                        );
                    });
                }
            }
        })
    };

    let render_field = |field: Field| {
        let error = form.error(field);
        let control_class = classes!("form-control", error.is_some().then_some("error"));
        let error_id = format!("{}-error", field.id());
        let described_by = error.is_some().then(|| error_id.clone());

        let control = match field {
            Field::Message => html! {
                <textarea
                    id={field.id()}
                    name={field.id()}
                    class={control_class}
                    rows="5"
                    required={field.required()}
                    value={form.value(field).to_string()}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={described_by}
                    oninput={on_input(field)}
                    onblur={on_blur(field)}
                />
            },
            _ => html! {
                <input
                    id={field.id()}
                    name={field.id()}
                    type={if field == Field::Email { "email" } else { "text" }}
                    class={control_class}
                    required={field.required()}
                    value={form.value(field).to_string()}
                    aria-invalid={error.is_some().to_string()}
                    aria-describedby={described_by}
                    oninput={on_input(field)}
                    onblur={on_blur(field)}
                />
            },
        };

        html! {
            <div class="form-group">
                <label for={field.id()}>{field.label()}</label>
                {control}
                if let Some(error) = error {
                    <span id={error_id} class="error-message" role="alert">
                        {error.to_string()}
                    </span>
                }
            </div>
        }
    };

    let sending = form.state() == SubmitState::Sending;
    html! {
        <section id="contact" class="contact section">
            <div class="container">
                <h2 class="section-title fade-in">{"Get In Touch"}</h2>
                <div class="contact-content">
                    <div class="contact-info slide-in-left">
                        <p>{"Have a project in mind or just want to say hi? My inbox is open."}</p>
                        <a class="contact-email" href={format!("mailto:{}", config.profile.email)}>
                            {config.profile.email.clone()}
                        </a>
                    </div>
                    <form
                        id="contact-form"
                        class="contact-form slide-in-right"
                        novalidate={true}
                        onsubmit={on_submit}
                    >
                        { for Field::ALL.into_iter().map(render_field) }
                        <button type="submit" class="btn btn-primary" disabled={sending}>
                            {form.state().button_label()}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
