mod use_designer;
mod use_designer_config;

pub use use_designer::{DesignerHandle, use_designer};
pub use use_designer_config::use_designer_config;
