use dioxus::prelude::*;

use ui::{use_auth, AppSidebar, NavSection};

use crate::Route;

/// Sidebar layout wrapping the routed pages.
#[component]
pub fn Shell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let active = match route {
        Route::Images {} => NavSection::Images,
        Route::Videos {} => NavSection::Videos,
        _ => NavSection::Home,
    };

    rsx! {
        div {
            class: "app-shell",
            AppSidebar {
                active,
                user: auth().user,
                on_navigate: move |section| {
                    let target = match section {
                        NavSection::Home => Route::Home {},
                        NavSection::Images => Route::Images {},
                        NavSection::Videos => Route::Videos {},
                    };
                    nav.push(target);
                },
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
