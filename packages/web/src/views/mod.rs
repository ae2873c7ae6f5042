mod welcome;
pub use welcome::Welcome;

mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod images;
pub use images::{Images, PageNotFound};

mod videos;
pub use videos::Videos;
