//! Page components.

mod designer;
mod not_found;

pub use designer::DesignerPage;
pub use not_found::NotFoundPage;
