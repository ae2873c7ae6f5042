use api::Session;
use dioxus::prelude::*;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// The sections reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Images,
    Videos,
}

impl NavSection {
    const ALL: [NavSection; 3] = [NavSection::Home, NavSection::Images, NavSection::Videos];

    fn label(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::Images => "Images",
            NavSection::Videos => "Videos",
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            NavSection::Home => "\u{1F3E0}",
            NavSection::Images => "\u{1F5BC}",
            NavSection::Videos => "\u{1F3AC}",
        }
    }
}

#[component]
pub fn AppSidebar(
    active: NavSection,
    user: Option<Session>,
    on_navigate: EventHandler<NavSection>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        div {
            class: "sidebar",

            // User header
            div {
                class: "sidebar-user",
                span {
                    class: "sidebar-user-name",
                    if let Some(ref u) = user {
                        "{u.email}"
                    } else {
                        "MediaShelf"
                    }
                }
            }

            // Section links
            div {
                class: "sidebar-nav",
                for section in NavSection::ALL {
                    button {
                        key: "{section.label()}",
                        class: if section == active { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(section),
                        span { class: "icon", "{section.glyph()}" }
                        span { "{section.label()}" }
                    }
                }
            }

            // Bottom actions
            div {
                class: "sidebar-bottom",
                SignOutItem {}
            }
        }
    }
}

#[component]
fn SignOutItem() -> Element {
    let client = crate::use_auth_client();

    rsx! {
        button {
            class: "sidebar-bottom-item",
            onclick: move |_| client.sign_out(),
            "Sign out"
        }
    }
}
