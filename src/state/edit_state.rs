//! Query buffer plus the "restored and untouched" selection flag.

use super::LineEdit;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, ModifierKeyCode};

/// The editable query.
///
/// `initially_marked` is set only when the session starts from a restored,
/// non-empty query. While set, the query is drawn as a selection and the
/// first typed text replaces it. Once cleared it never comes back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    buffer: LineEdit,
    initially_marked: bool,
}

impl EditState {
    /// Seed from the query persisted by the previous session.
    pub fn restored(last_query: &str) -> Self {
        Self {
            buffer: LineEdit::with_text(last_query),
            initially_marked: !last_query.is_empty(),
        }
    }

    /// Current query.
    pub fn text(&self) -> &str {
        self.buffer.current_input()
    }

    /// The underlying editor.
    pub fn buffer(&self) -> &LineEdit {
        &self.buffer
    }

    /// Mutable access to the editor. Does not touch the selection flag.
    pub fn buffer_mut(&mut self) -> &mut LineEdit {
        &mut self.buffer
    }

    /// Whether the restored query is still shown as a selection.
    pub fn is_marked(&self) -> bool {
        self.initially_marked
    }

    /// Drop the selection styling. Returns whether it was set.
    pub fn unmark(&mut self) -> bool {
        std::mem::take(&mut self.initially_marked)
    }

    /// Typed or pasted text: replaces a marked query, otherwise inserts at
    /// the cursor.
    pub fn input_text(&mut self, text: &str) {
        if self.unmark() {
            self.buffer.clear();
        }
        self.buffer.insert_text(text);
    }
}

/// Whether a key press discards the restored-query selection.
///
/// Pure modifier keys and the mode toggle keep it; everything else drops it.
pub fn clears_selection(key: &KeyEvent, bindings: &KeyBindings) -> bool {
    if let KeyCode::Modifier(modifier) = key.code {
        if matches!(
            modifier,
            ModifierKeyCode::LeftControl
                | ModifierKeyCode::RightControl
                | ModifierKeyCode::LeftAlt
                | ModifierKeyCode::RightAlt
                | ModifierKeyCode::LeftSuper
                | ModifierKeyCode::RightSuper
        ) {
            return false;
        }
    }
    !bindings.is_bound_to(*key, KeyAction::ToggleMode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn restored_non_empty_query_is_marked() {
        let state = EditState::restored("foo");
        assert!(state.is_marked());
        assert_eq!(state.text(), "foo");
    }

    #[test]
    fn restored_empty_query_is_not_marked() {
        assert!(!EditState::restored("").is_marked());
    }

    #[test]
    fn text_input_replaces_marked_query() {
        let mut state = EditState::restored("old");
        state.input_text("n");
        assert_eq!(state.text(), "n");
        assert!(!state.is_marked());
    }

    #[test]
    fn text_input_appends_once_unmarked() {
        let mut state = EditState::restored("old");
        state.unmark();
        state.input_text("er");
        assert_eq!(state.text(), "older");
    }

    #[test]
    fn unmark_reports_previous_value() {
        let mut state = EditState::restored("x");
        assert!(state.unmark());
        assert!(!state.unmark());
    }

    #[test]
    fn modifier_keys_keep_selection() {
        let bindings = KeyBindings::default();
        for modifier in [
            ModifierKeyCode::LeftControl,
            ModifierKeyCode::RightControl,
            ModifierKeyCode::LeftAlt,
            ModifierKeyCode::RightAlt,
            ModifierKeyCode::LeftSuper,
            ModifierKeyCode::RightSuper,
        ] {
            assert!(!clears_selection(&press(KeyCode::Modifier(modifier)), &bindings));
        }
    }

    #[test]
    fn shift_key_alone_clears_selection() {
        let bindings = KeyBindings::default();
        let shift = press(KeyCode::Modifier(ModifierKeyCode::LeftShift));
        assert!(clears_selection(&shift, &bindings));
    }

    #[test]
    fn mode_toggle_keeps_selection() {
        assert!(!clears_selection(&press(KeyCode::Tab), &KeyBindings::default()));
    }

    #[test]
    fn other_keys_clear_selection() {
        let bindings = KeyBindings::default();
        for code in [KeyCode::Left, KeyCode::Backspace, KeyCode::Up, KeyCode::Enter] {
            assert!(clears_selection(&press(code), &bindings), "{code:?}");
        }
    }
}
