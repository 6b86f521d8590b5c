use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::use_site_config;
use crate::notification::{Notification, NotificationKind, NotificationQueue};

const SHOW_DELAY_MS: u32 = 10;

#[derive(Clone, PartialEq)]
pub struct Notifier(Callback<(NotificationKind, String)>);

impl Notifier {
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.0.emit((kind, message.into()));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self(Callback::noop())
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

enum ToastAction {
    Push(NotificationKind, String),
    Dismiss(u64),
}

#[derive(Default, PartialEq)]
struct Toasts {
    queue: NotificationQueue,
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = self.queue.clone();
        match action {
            ToastAction::Push(kind, message) => {
                queue.push(kind, message);
            }
            ToastAction::Dismiss(id) => {
                if !queue.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(Self { queue })
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
    lifetime_ms: u32,
    on_dismiss: Callback<u64>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        let id = props.notification.id;
        let lifetime_ms = props.lifetime_ms;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let show = Timeout::new(SHOW_DELAY_MS, move || shown.set(true));
            let expire = Timeout::new(lifetime_ms, move || on_dismiss.emit(id));
            move || {
                drop(show);
                drop(expire);
            }
        });
    }

    let onclick = {
        let id = props.notification.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let kind = props.notification.kind;
    html! {
        <div
            class={classes!("notification", kind.class(), (*shown).then_some("show"))}
            role="status"
        >
            <span class="notification-icon" aria-hidden="true">{kind.icon()}</span>
            <span class="notification-message">{props.notification.message.clone()}</span>
            <button
                class="notification-close"
                type="button"
                aria-label="Dismiss notification"
                {onclick}
            >
                {"×"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Html,
}

/// Provides a `Notifier` to its children and renders the toast stack.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let config = use_site_config();
    let toasts = use_reducer(Toasts::default);

    let notifier = {
        let toasts = toasts.dispatcher();
        use_memo((), move |_| {
            Notifier(Callback::from(move |(kind, message)| {
                toasts.dispatch(ToastAction::Push(kind, message))
            }))
        })
    };

    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { props.children.clone() }
            <div class="notification-stack" aria-live="polite">
                { for toasts.queue.items().iter().map(|notification| html! {
                    <Toast
                        key={notification.id}
                        notification={notification.clone()}
                        lifetime_ms={config.notification.lifetime_ms}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}
