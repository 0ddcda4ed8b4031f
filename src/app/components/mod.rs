//! Shared UI chrome for the protected screens.

pub mod field;
pub mod header;
pub mod layout;
pub mod sidebar;

pub use field::TextField;
pub use header::Header;
pub use layout::Layout;
pub use sidebar::Sidebar;
