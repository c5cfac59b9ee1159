//! Keeps the highlights in the target windows in line with the query.
//!
//! Stateless: every pass recomputes the commands from (text, mode, panes).
//! Command failures are logged and dropped; the next pass re-issues them.

use crate::model::{PaneSet, SearchMode};
use crate::remote::{PaneController, ScrollDirection, MARKER_SLOT};
use tracing::debug;

/// Whether the query selects case-insensitive matching.
///
/// True when the text has at least one cased char and every cased char is
/// lowercase, so `"foo"` is insensitive while `"Foo"`, `"ǅa"` (titlecase)
/// and `"123"` are not.
pub fn is_lowercase_query(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            has_cased = true;
        } else if is_cased(c) {
            return false;
        }
    }
    has_cased
}

/// Uppercase, titlecase and any other char with a case mapping.
fn is_cased(c: char) -> bool {
    c.is_uppercase() || !c.to_lowercase().eq([c]) || !c.to_uppercase().eq([c])
}

/// Marker match type: optional `i` prefix followed by the mode name.
pub fn match_type(text: &str, mode: SearchMode) -> String {
    let prefix = if is_lowercase_query(text) { "i" } else { "" };
    format!("{prefix}{}", mode.as_str())
}

/// Bring every pane's marker in line with `text`.
///
/// Empty text removes the markers; otherwise each pane gets the same
/// marker, replacing the previous one.
pub fn sync_marks<P>(panes: &mut P, text: &str, mode: SearchMode, targets: &PaneSet)
where
    P: PaneController + ?Sized,
{
    if text.is_empty() {
        clear_marks(panes, targets);
        return;
    }

    let match_type = match_type(text, mode);
    for pane in targets.iter() {
        if let Err(err) = panes.create_marker(pane, &match_type, MARKER_SLOT, text) {
            debug!(%pane, error = %err, "create-marker failed");
        }
    }
}

/// Remove the marker from every pane.
pub fn clear_marks<P>(panes: &mut P, targets: &PaneSet)
where
    P: PaneController + ?Sized,
{
    for pane in targets.iter() {
        if let Err(err) = panes.remove_marker(pane) {
            debug!(%pane, error = %err, "remove-marker failed");
        }
    }
}

/// Scroll every pane to its next/previous match.
pub fn navigate<P>(panes: &mut P, direction: ScrollDirection, targets: &PaneSet)
where
    P: PaneController + ?Sized,
{
    for pane in targets.iter() {
        if let Err(err) = panes.scroll_to_mark(pane, direction) {
            debug!(%pane, ?direction, error = %err, "scroll to mark failed");
        }
    }
}

/// Scroll every pane back to the end of its output.
pub fn scroll_to_end<P>(panes: &mut P, targets: &PaneSet)
where
    P: PaneController + ?Sized,
{
    for pane in targets.iter() {
        if let Err(err) = panes.scroll_to_end(pane) {
            debug!(%pane, error = %err, "scroll to end failed");
        }
    }
}
