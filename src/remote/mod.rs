//! Remote control of the target windows (impure shell).
//!
//! The session never talks to the terminal host directly: every side effect
//! on a target window goes through [`PaneController`], so tests can record
//! the exact command sequence with a fake.

pub mod kitty;
pub mod topology;

pub use kitty::KittyRemote;
pub use topology::{resolve_pane_set, OsWindow, Resolution, Tab, WindowInfo};

use crate::model::{RemoteError, WindowId};

/// Marker slot used for every highlight this session creates.
///
/// A single slot means re-creating the marker replaces the previous one
/// instead of stacking highlights.
pub const MARKER_SLOT: u8 = 1;

/// Direction for jumping between highlighted matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Towards older output (the default of `scroll_mark`).
    Previous,
    /// Towards newer output.
    Next,
}

/// Capability interface over the windows a session affects.
///
/// Every call is fire-and-forget from the session's point of view: callers
/// log failures and move on.
pub trait PaneController {
    /// Highlight `query` in `pane`, replacing whatever `slot` held before.
    fn create_marker(
        &mut self,
        pane: WindowId,
        match_type: &str,
        slot: u8,
        query: &str,
    ) -> Result<(), RemoteError>;

    /// Remove all highlights from `pane`. Succeeds when none exist.
    fn remove_marker(&mut self, pane: WindowId) -> Result<(), RemoteError>;

    /// Scroll `pane` so the next/previous marked match is visible.
    fn scroll_to_mark(
        &mut self,
        pane: WindowId,
        direction: ScrollDirection,
    ) -> Result<(), RemoteError>;

    /// Scroll `pane` back to the bottom of its output.
    fn scroll_to_end(&mut self, pane: WindowId) -> Result<(), RemoteError>;
}

impl<P: PaneController + ?Sized> PaneController for &mut P {
    fn create_marker(
        &mut self,
        pane: WindowId,
        match_type: &str,
        slot: u8,
        query: &str,
    ) -> Result<(), RemoteError> {
        (**self).create_marker(pane, match_type, slot, query)
    }

    fn remove_marker(&mut self, pane: WindowId) -> Result<(), RemoteError> {
        (**self).remove_marker(pane)
    }

    fn scroll_to_mark(
        &mut self,
        pane: WindowId,
        direction: ScrollDirection,
    ) -> Result<(), RemoteError> {
        (**self).scroll_to_mark(pane, direction)
    }

    fn scroll_to_end(&mut self, pane: WindowId) -> Result<(), RemoteError> {
        (**self).scroll_to_end(pane)
    }
}
