//! Email/password sign-in form.
//!
//! Empty fields are rejected locally; everything else is the provider's
//! verdict, normalized by the api crate and shown as a toast.

use dioxus::prelude::*;

use crate::toast::{push_toast, use_toasts, ToastLevel};
use crate::use_auth_client;

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

#[component]
pub fn LoginForm() -> Element {
    let client = use_auth_client();
    let mut toasts = use_toasts();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let handle_submit = move |_| {
        let client = client.clone();
        async move {
            let address = email().trim().to_string();
            if address.is_empty() || password().is_empty() {
                push_toast(
                    &mut toasts,
                    ToastLevel::Warning,
                    "Missing credentials",
                    "Enter a valid email and password",
                );
                return;
            }

            busy.set(true);
            match client.sign_in_with_password(&address, &password()).await {
                Ok(session) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Success,
                        "Login successful",
                        &format!("Welcome {}", session.email),
                    );
                }
                Err(err) => {
                    tracing::warn!("sign-in failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, "Sign-in failed", &err.to_string());
                }
            }
            busy.set(false);
        }
    };

    rsx! {
        document::Stylesheet { href: LOGIN_CSS }

        div {
            class: "login-form",
            div {
                class: "login-field",
                label { r#for: "login-email", "Enter email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    placeholder: "Enter email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div {
                class: "login-field",
                label { r#for: "login-password", "Enter password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    placeholder: "Enter password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            button {
                class: "login-submit",
                disabled: busy(),
                onclick: handle_submit,
                if busy() { "Signing in..." } else { "Login" }
            }
        }
    }
}
