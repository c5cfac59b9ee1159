//! Shared fakes for integration tests.
#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pane_search::config::KeyBindings;
use pane_search::model::{RemoteError, SearchMode, StoreError, WindowId};
use pane_search::remote::{PaneController, Resolution, ScrollDirection};
use pane_search::state::{Flow, SessionController, SessionEvent};
use pane_search::store::{PersistedSession, SessionStore};

/// Records each remote call in kitty's command-line form, e.g.
/// `create-marker --match=id:42 text 1 Hello`.
#[derive(Debug, Default)]
pub struct FakeKitty {
    pub log: Vec<String>,
}

impl FakeKitty {
    pub fn creates(&self) -> Vec<&str> {
        self.matching("create-marker")
    }

    pub fn removes(&self) -> Vec<&str> {
        self.matching("remove-marker")
    }

    pub fn scrolls_to_end(&self) -> Vec<&str> {
        self.matching("scroll-window")
    }

    fn matching(&self, prefix: &str) -> Vec<&str> {
        self.log
            .iter()
            .map(String::as_str)
            .filter(|line| line.starts_with(prefix))
            .collect()
    }
}

impl PaneController for FakeKitty {
    fn create_marker(
        &mut self,
        pane: WindowId,
        match_type: &str,
        slot: u8,
        query: &str,
    ) -> Result<(), RemoteError> {
        self.log.push(format!(
            "create-marker {} {match_type} {slot} {query}",
            pane.match_arg()
        ));
        Ok(())
    }

    fn remove_marker(&mut self, pane: WindowId) -> Result<(), RemoteError> {
        self.log.push(format!("remove-marker {}", pane.match_arg()));
        Ok(())
    }

    fn scroll_to_mark(
        &mut self,
        pane: WindowId,
        direction: ScrollDirection,
    ) -> Result<(), RemoteError> {
        let suffix = match direction {
            ScrollDirection::Next => " next",
            ScrollDirection::Previous => "",
        };
        self.log
            .push(format!("kitten {} scroll_mark.py{suffix}", pane.match_arg()));
        Ok(())
    }

    fn scroll_to_end(&mut self, pane: WindowId) -> Result<(), RemoteError> {
        self.log
            .push(format!("scroll-window {} end", pane.match_arg()));
        Ok(())
    }
}

/// Keeps the persisted record in memory and counts writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub record: PersistedSession,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(last_query: &str, last_mode: SearchMode) -> Self {
        Self {
            record: PersistedSession {
                last_query: last_query.to_string(),
                last_mode,
            },
            writes: 0,
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&mut self) -> Result<PersistedSession, StoreError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, session: &PersistedSession) -> Result<(), StoreError> {
        self.record = session.clone();
        self.writes += 1;
        Ok(())
    }
}

pub type Session = SessionController<FakeKitty, MemoryStore>;

pub fn session(resolution: Resolution, store: MemoryStore) -> Session {
    SessionController::new(FakeKitty::default(), store, resolution, KeyBindings::default())
}

pub fn key(code: KeyCode) -> SessionEvent {
    SessionEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(ch: char) -> SessionEvent {
    SessionEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

pub fn type_text(session: &mut Session, text: &str) {
    for ch in text.chars() {
        assert_eq!(session.handle_event(key(KeyCode::Char(ch))), Flow::Redraw);
    }
}
