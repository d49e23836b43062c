pub mod layout;
pub mod modal;
pub mod navbar;
pub mod status_line;

pub use layout::Layout;
pub use modal::Modal;
pub use navbar::NavBar;
pub use status_line::StatusLine;
