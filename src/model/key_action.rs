//! Domain-level keyboard actions independent of key bindings.

/// Actions the search session understands.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Plain editing keys (backspace, arrows left/right, ...) are not actions:
/// the line editor consumes them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Empty the query. Default: Ctrl+u
    ClearLine,
    /// Move the cursor to the start of the query. Default: Ctrl+a
    Home,
    /// Move the cursor to the end of the query. Default: Ctrl+e
    End,
    /// Switch between text and regex matching. Default: Tab
    ToggleMode,
    /// Scroll target windows to the previous match. Default: ↑
    PreviousMatch,
    /// Scroll target windows to the next match. Default: ↓
    NextMatch,
    /// Accept the query and exit successfully. Default: Enter
    Confirm,
    /// Abandon the search and scroll targets back to the end. Default: Esc
    Cancel,
}
