use dioxus::prelude::*;

use ui::LoginForm;

/// Landing page shown while no session is present.
#[component]
pub fn Welcome() -> Element {
    rsx! {
        div {
            class: "welcome",
            div {
                class: "welcome-hero",
                h1 { "Your media, in one place" }
                p {
                    "Upload images and videos, preview them instantly, and browse "
                    "everything from the home page."
                }
            }
            div {
                class: "welcome-login",
                h2 { "Sign in" }
                LoginForm {}
            }
        }
    }
}
