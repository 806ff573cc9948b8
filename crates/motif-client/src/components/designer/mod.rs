//! Motif designer UI components.

mod handle_overlay;
mod lock_button;
mod stage;

pub use handle_overlay::HandleOverlay;
pub use lock_button::LockButton;
pub use stage::DesignerStage;
