//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, use_auth_client, AuthProvider, AuthState};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod library;
pub use library::use_media_library;

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::{AppSidebar, NavSection};

mod upload_form;
pub use upload_form::UploadForm;

mod media_card;
pub use media_card::{MediaCard, MediaGallery};

mod login_form;
pub use login_form::LoginForm;

pub mod files;
