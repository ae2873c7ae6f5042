//! Transient, auto-dismissing notifications.
//!
//! Every validation or auth failure the user can cause ends up here; nothing
//! is thrown past the event handler that produced it.

use dioxus::prelude::*;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Warning => "toast-warning",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast for three seconds.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, title: &str, message: &str) {
    let id = {
        let mut state = toasts.write();
        let id = state.next_id;
        state.next_id += 1;
        state.entries.push(Toast {
            id,
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
        id
    };

    let mut toasts = *toasts;
    spawn(async move {
        dismiss_delay().await;
        toasts.write().entries.retain(|t| t.id != id);
    });
}

#[cfg(target_arch = "wasm32")]
async fn dismiss_delay() {
    gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn dismiss_delay() {
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
}

/// Provides the toast context and renders the stack above the children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        {children}
        div {
            class: "toast-stack",
            for toast in toasts().entries {
                div {
                    key: "{toast.id}",
                    class: "toast {toast.level.class()}",
                    span { class: "toast-title", "{toast.title}" }
                    span { class: "toast-message", "{toast.message}" }
                }
            }
        }
    }
}
