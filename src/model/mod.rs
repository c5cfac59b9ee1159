//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod pane_set;
pub mod search_mode;

// Re-export for convenience
pub use error::{AppError, RemoteError, StartupError, StoreError};
pub use identifiers::{InvalidWindowId, WindowId};
pub use key_action::KeyAction;
pub use pane_set::PaneSet;
pub use search_mode::SearchMode;
