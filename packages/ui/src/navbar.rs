use api::Session;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar(user: Option<Session>) -> Element {
    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        div {
            class: "navbar",
            span { class: "navbar-brand", "MediaShelf" }
            if let Some(ref user) = user {
                span { class: "navbar-user", "{user.email}" }
            } else {
                span { class: "navbar-user navbar-user-muted", "Sign in to upload" }
            }
        }
    }
}
