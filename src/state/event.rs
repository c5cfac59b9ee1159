//! Events the search session reacts to.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Closed set of inputs for [`SessionController`](super::SessionController).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A key press, repeat or release.
    Key(KeyEvent),
    /// Bracketed paste.
    Paste(String),
    /// The terminal changed size.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// Ctrl+C.
    Interrupt,
    /// Ctrl+D.
    EndOfInput,
}

impl SessionEvent {
    /// Translate a terminal event. Returns `None` for events the session
    /// ignores (focus changes, mouse).
    ///
    /// Raw mode delivers Ctrl+C and Ctrl+D as ordinary keys, so they are
    /// turned back into interrupt and end-of-input here.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.modifiers == KeyModifiers::CONTROL => match key.code {
                KeyCode::Char('c') => Some(SessionEvent::Interrupt),
                KeyCode::Char('d') => Some(SessionEvent::EndOfInput),
                _ => Some(SessionEvent::Key(key)),
            },
            Event::Key(key) => Some(SessionEvent::Key(key)),
            Event::Paste(text) => Some(SessionEvent::Paste(text)),
            Event::Resize(width, height) => Some(SessionEvent::Resize { width, height }),
            Event::FocusGained | Event::FocusLost | Event::Mouse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_is_interrupt() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(SessionEvent::from_terminal(event), Some(SessionEvent::Interrupt));
    }

    #[test]
    fn ctrl_d_is_end_of_input() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(SessionEvent::from_terminal(event), Some(SessionEvent::EndOfInput));
    }

    #[test]
    fn plain_c_is_a_key() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(
            SessionEvent::from_terminal(Event::Key(key)),
            Some(SessionEvent::Key(key))
        );
    }

    #[test]
    fn paste_and_resize_pass_through() {
        assert_eq!(
            SessionEvent::from_terminal(Event::Paste("abc".to_string())),
            Some(SessionEvent::Paste("abc".to_string()))
        );
        assert_eq!(
            SessionEvent::from_terminal(Event::Resize(80, 1)),
            Some(SessionEvent::Resize {
                width: 80,
                height: 1
            })
        );
    }

    #[test]
    fn focus_events_are_dropped() {
        assert_eq!(SessionEvent::from_terminal(Event::FocusGained), None);
        assert_eq!(SessionEvent::from_terminal(Event::FocusLost), None);
    }
}
