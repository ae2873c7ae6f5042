use dioxus::prelude::*;

use store::MediaLibrary;
use ui::{use_auth, AuthProvider, Navbar, ToastProvider};
use views::{Home, Images, PageNotFound, Shell, Videos, Welcome};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/images")]
        Images {},
        #[route("/videos")]
        Videos {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            AuthProvider {
                Gate {}
            }
        }
    }
}

/// Render the authenticated shell or the landing page, based purely on the
/// current session. First paint happens before the provider has reported
/// anything, so it shows the landing page.
#[component]
fn Gate() -> Element {
    let auth = use_auth();
    use_context_provider(|| Signal::new(MediaLibrary::new()));

    rsx! {
        Navbar { user: auth().user }
        if auth().user.is_some() {
            Router::<Route> {}
        } else {
            Welcome {}
        }
    }
}
