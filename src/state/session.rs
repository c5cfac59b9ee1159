//! Search session state machine.
//!
//! `SessionController` owns the query, the mode and the target windows, and
//! decides which remote-control commands every event produces. Rendering is
//! left to the caller: a returned [`Flow::Redraw`] means the visible state
//! changed and marks have already been re-synchronized.

use super::edit_state::{clears_selection, EditState};
use super::mark_sync;
use super::{ModeManager, SessionEvent};
use crate::config::KeyBindings;
use crate::model::{KeyAction, PaneSet, SearchMode, StartupError};
use crate::remote::{PaneController, Resolution, ScrollDirection};
use crate::store::{PersistedSession, SessionStore};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Query accepted (Enter).
    Confirmed,
    /// Escape, Ctrl+C, Ctrl+D, or any exit from error-only mode.
    Cancelled,
}

impl SessionOutcome {
    /// Process exit code: 0 when confirmed, 1 otherwise.
    pub fn exit_code(self) -> u8 {
        match self {
            SessionOutcome::Confirmed => 0,
            SessionOutcome::Cancelled => 1,
        }
    }
}

/// Lifecycle of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Normal editing.
    Active,
    /// Startup resolution failed: only the error is shown, only exit works.
    ErrorOnly,
    /// Teardown done; every further event is answered with the outcome.
    Terminating(SessionOutcome),
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Nothing visible changed.
    Idle,
    /// Draw a new frame.
    Redraw,
    /// Leave the loop with this outcome.
    Exit(SessionOutcome),
}

/// One search session over a fixed set of target windows.
///
/// `P` performs the remote-control side effects, `S` holds the query and
/// mode between invocations.
pub struct SessionController<P, S> {
    panes: P,
    store: S,
    targets: PaneSet,
    pending_error: Option<StartupError>,
    edit: EditState,
    modes: ModeManager,
    bindings: KeyBindings,
    cached: PersistedSession,
    phase: SessionPhase,
}

impl<P, S> SessionController<P, S>
where
    P: PaneController,
    S: SessionStore,
{
    /// Restore the last query and mode from `store` and, unless resolution
    /// failed, highlight the restored query right away.
    pub fn new(panes: P, mut store: S, resolution: Resolution, bindings: KeyBindings) -> Self {
        let cached = store.load().unwrap_or_else(|err| {
            warn!(error = %err, "could not restore last search, starting empty");
            PersistedSession::default()
        });

        let Resolution {
            panes: targets,
            error: pending_error,
        } = resolution;

        let phase = if pending_error.is_some() && targets.is_empty() {
            SessionPhase::ErrorOnly
        } else {
            SessionPhase::Active
        };

        info!(
            targets = ?targets.as_slice(),
            mode = %cached.last_mode,
            ?phase,
            "search session started"
        );

        let mut controller = Self {
            panes,
            store,
            targets,
            pending_error,
            edit: EditState::restored(&cached.last_query),
            modes: ModeManager::new(cached.last_mode),
            bindings,
            cached,
            phase,
        };

        if controller.phase == SessionPhase::Active {
            controller.sync_marks();
        }

        controller
    }

    // ===== Accessors =====

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current query.
    pub fn text(&self) -> &str {
        self.edit.text()
    }

    /// Query buffer and selection flag.
    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Current search mode.
    pub fn mode(&self) -> SearchMode {
        self.modes.mode()
    }

    /// Prompt glyph for the current mode.
    pub fn prompt(&self) -> &'static str {
        self.modes.prompt_glyph()
    }

    /// Whether the restored query is still a selection.
    pub fn is_marked(&self) -> bool {
        self.edit.is_marked()
    }

    /// Windows this session searches.
    pub fn targets(&self) -> &PaneSet {
        &self.targets
    }

    /// Startup error shown instead of the prompt.
    pub fn pending_error(&self) -> Option<&StartupError> {
        self.pending_error.as_ref()
    }

    /// The remote-control backend.
    pub fn panes(&self) -> &P {
        &self.panes
    }

    /// Mutable access to the remote-control backend.
    pub fn panes_mut(&mut self) -> &mut P {
        &mut self.panes
    }

    /// The persistence backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ===== Event dispatch =====

    /// Apply one event.
    pub fn handle_event(&mut self, event: SessionEvent) -> Flow {
        match self.phase {
            SessionPhase::Terminating(outcome) => Flow::Exit(outcome),
            SessionPhase::ErrorOnly => self.handle_error_only(event),
            SessionPhase::Active => self.handle_active(event),
        }
    }

    fn handle_error_only(&mut self, event: SessionEvent) -> Flow {
        match event {
            SessionEvent::Interrupt | SessionEvent::EndOfInput => {
                self.terminate(SessionOutcome::Cancelled)
            }
            SessionEvent::Key(key) if key.kind != KeyEventKind::Release => {
                match self.bindings.get(key) {
                    Some(KeyAction::Cancel | KeyAction::Confirm) => {
                        self.terminate(SessionOutcome::Cancelled)
                    }
                    _ => Flow::Idle,
                }
            }
            SessionEvent::Resize { .. } => Flow::Redraw,
            SessionEvent::Key(_) | SessionEvent::Paste(_) => Flow::Idle,
        }
    }

    fn handle_active(&mut self, event: SessionEvent) -> Flow {
        match event {
            SessionEvent::Interrupt | SessionEvent::EndOfInput => {
                self.terminate(SessionOutcome::Cancelled)
            }
            SessionEvent::Resize { width, height } => {
                debug!(width, height, "resize");
                Flow::Redraw
            }
            SessionEvent::Paste(text) => {
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                if text.is_empty() {
                    return Flow::Idle;
                }
                self.edit.input_text(&text);
                self.refresh()
            }
            SessionEvent::Key(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind == KeyEventKind::Release {
            return Flow::Idle;
        }

        let action = self.bindings.get(key);

        if action.is_none() {
            if let Some(ch) = typed_char(&key) {
                self.edit.input_text(ch.encode_utf8(&mut [0; 4]));
                return self.refresh();
            }
        }

        let mut dirty = false;
        if self.edit.is_marked() && clears_selection(&key, &self.bindings) {
            self.edit.unmark();
            dirty = true;
        }

        if self.edit.buffer_mut().on_key(&key) {
            return self.refresh();
        }

        match action {
            Some(KeyAction::ClearLine) => {
                self.edit.buffer_mut().clear();
                self.refresh()
            }
            Some(KeyAction::Home) => {
                self.edit.buffer_mut().home();
                self.refresh()
            }
            Some(KeyAction::End) => {
                self.edit.buffer_mut().end();
                self.refresh()
            }
            Some(KeyAction::ToggleMode) => {
                self.toggle_mode();
                self.refresh()
            }
            Some(KeyAction::PreviousMatch) => {
                mark_sync::navigate(&mut self.panes, ScrollDirection::Previous, &self.targets);
                self.settle(dirty)
            }
            Some(KeyAction::NextMatch) => {
                mark_sync::navigate(&mut self.panes, ScrollDirection::Next, &self.targets);
                self.settle(dirty)
            }
            Some(KeyAction::Confirm) => self.terminate(SessionOutcome::Confirmed),
            Some(KeyAction::Cancel) => self.terminate(SessionOutcome::Cancelled),
            None => self.settle(dirty),
        }
    }

    // ===== Transitions =====

    /// Flip the mode and write it through to the store immediately.
    fn toggle_mode(&mut self) {
        let mode = self.modes.toggle();
        self.cached.last_mode = mode;
        self.persist();
    }

    fn sync_marks(&mut self) {
        mark_sync::sync_marks(
            &mut self.panes,
            self.edit.text(),
            self.modes.mode(),
            &self.targets,
        );
    }

    fn refresh(&mut self) -> Flow {
        self.sync_marks();
        Flow::Redraw
    }

    fn settle(&mut self, dirty: bool) -> Flow {
        if dirty {
            self.refresh()
        } else {
            Flow::Idle
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.cached) {
            warn!(error = %err, "could not persist search state");
        }
    }

    fn terminate(&mut self, outcome: SessionOutcome) -> Flow {
        Flow::Exit(self.finish(outcome))
    }

    /// Tear the session down: persist the query and mode, remove every
    /// marker and, when cancelling, scroll targets back to the end.
    ///
    /// Runs at most once. Later calls return the first outcome, so the event
    /// loop can call this on abnormal exits without double teardown.
    pub fn finish(&mut self, outcome: SessionOutcome) -> SessionOutcome {
        if let SessionPhase::Terminating(done) = self.phase {
            return done;
        }

        self.cached.last_query = self.edit.text().to_string();
        self.cached.last_mode = self.modes.mode();
        self.persist();

        mark_sync::clear_marks(&mut self.panes, &self.targets);
        if outcome == SessionOutcome::Cancelled {
            mark_sync::scroll_to_end(&mut self.panes, &self.targets);
        }

        info!(?outcome, "search session finished");
        self.phase = SessionPhase::Terminating(outcome);
        outcome
    }
}

/// A printable character typed with no modifier other than Shift.
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
