//! UI components for the motif designer client.

pub mod designer;
mod layout;
mod navbar;

pub use designer::DesignerStage;
pub use layout::Layout;
pub use navbar::Navbar;
