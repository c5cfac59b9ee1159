//! Search session state machine.
//!
//! Editing, mode and selection state are pure; the only side effects go
//! through the `PaneController` and `SessionStore` the controller is given.

pub mod edit_state;
pub mod event;
pub mod line_edit;
pub mod mark_sync;
pub mod mode;
pub mod session;

// Re-export for convenience
pub use edit_state::{clears_selection, EditState};
pub use event::SessionEvent;
pub use line_edit::LineEdit;
pub use mark_sync::{match_type, sync_marks};
pub use mode::ModeManager;
pub use session::{Flow, SessionController, SessionOutcome, SessionPhase};
