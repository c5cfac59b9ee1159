//! Test doubles for the session's external collaborators.
//!
//! `RecordingPanes` captures every remote-control call in order so tests can
//! assert exact command sequences; `MemoryStore` stands in for the state file.

use crate::model::{RemoteError, StoreError, WindowId};
use crate::remote::{PaneController, ScrollDirection};
use crate::store::{PersistedSession, SessionStore};

/// One recorded remote-control call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneCall {
    Create {
        pane: WindowId,
        match_type: String,
        slot: u8,
        query: String,
    },
    Remove(WindowId),
    ScrollToMark(WindowId, ScrollDirection),
    ScrollToEnd(WindowId),
}

impl PaneCall {
    pub fn create(pane: u64, match_type: &str, query: &str) -> Self {
        PaneCall::Create {
            pane: WindowId::from(pane),
            match_type: match_type.to_string(),
            slot: 1,
            query: query.to_string(),
        }
    }
}

/// Records calls; optionally fails every one of them after recording.
#[derive(Debug, Default)]
pub struct RecordingPanes {
    pub calls: Vec<PaneCall>,
    fail: bool,
}

impl RecordingPanes {
    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            fail: true,
        }
    }

    pub fn take(&mut self) -> Vec<PaneCall> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, call: PaneCall) -> Result<(), RemoteError> {
        self.calls.push(call);
        if self.fail {
            Err(RemoteError::EmptyCommand)
        } else {
            Ok(())
        }
    }
}

impl PaneController for RecordingPanes {
    fn create_marker(
        &mut self,
        pane: WindowId,
        match_type: &str,
        slot: u8,
        query: &str,
    ) -> Result<(), RemoteError> {
        self.record(PaneCall::Create {
            pane,
            match_type: match_type.to_string(),
            slot,
            query: query.to_string(),
        })
    }

    fn remove_marker(&mut self, pane: WindowId) -> Result<(), RemoteError> {
        self.record(PaneCall::Remove(pane))
    }

    fn scroll_to_mark(
        &mut self,
        pane: WindowId,
        direction: ScrollDirection,
    ) -> Result<(), RemoteError> {
        self.record(PaneCall::ScrollToMark(pane, direction))
    }

    fn scroll_to_end(&mut self, pane: WindowId) -> Result<(), RemoteError> {
        self.record(PaneCall::ScrollToEnd(pane))
    }
}

/// In-memory store that keeps every saved snapshot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub initial: PersistedSession,
    pub saved: Vec<PersistedSession>,
    pub fail_load: bool,
}

impl MemoryStore {
    pub fn with(last_query: &str, last_mode: crate::model::SearchMode) -> Self {
        Self {
            initial: PersistedSession {
                last_query: last_query.to_string(),
                last_mode,
            },
            ..Self::default()
        }
    }

    pub fn last_saved(&self) -> Option<&PersistedSession> {
        self.saved.last()
    }
}

impl SessionStore for MemoryStore {
    fn load(&mut self) -> Result<PersistedSession, StoreError> {
        if self.fail_load {
            return Err(StoreError::Io {
                path: "memory".into(),
                source: std::io::Error::other("load failed"),
            });
        }
        Ok(self.initial.clone())
    }

    fn save(&mut self, session: &PersistedSession) -> Result<(), StoreError> {
        self.saved.push(session.clone());
        Ok(())
    }
}
