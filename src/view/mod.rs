//! TUI rendering and terminal management (impure shell)

mod prompt;

pub use prompt::PromptView;

use crate::remote::PaneController;
use crate::state::{Flow, SessionController, SessionEvent, SessionOutcome};
use crate::store::SessionStore;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    terminal::{
        disable_raw_mode, enable_raw_mode, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Window title while the overlay is open.
pub const WINDOW_TITLE: &str = "Search";

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, P, S>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    session: SessionController<P, S>,
}

impl<B, P, S> TuiApp<B, P, S>
where
    B: ratatui::backend::Backend,
    P: PaneController,
    S: SessionStore,
{
    /// Wrap an already constructed terminal (tests use `TestBackend`).
    pub fn with_terminal(terminal: Terminal<B>, session: SessionController<P, S>) -> Self {
        Self { terminal, session }
    }

    /// The session driven by this app.
    pub fn session(&self) -> &SessionController<P, S> {
        &self.session
    }

    /// The terminal frames are drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the event loop until the session ends.
    ///
    /// `next_event` blocks for the next terminal event; each one is processed
    /// to completion (including its remote calls) before the next is read.
    /// If the terminal fails mid-session the session is still torn down as
    /// cancelled before the error is returned.
    pub fn run<E>(&mut self, next_event: E) -> Result<SessionOutcome, TuiError>
    where
        E: FnMut() -> io::Result<Event>,
    {
        let result = self.event_loop(next_event);
        if let Err(err) = &result {
            error!(error = %err, "terminal failure, cancelling session");
            self.session.finish(SessionOutcome::Cancelled);
        }
        result
    }

    fn event_loop<E>(&mut self, mut next_event: E) -> Result<SessionOutcome, TuiError>
    where
        E: FnMut() -> io::Result<Event>,
    {
        self.draw()?;

        loop {
            let event = next_event()?;
            if let Some(outcome) = self.handle_terminal_event(event)? {
                return Ok(outcome);
            }
        }
    }

    /// Feed one terminal event through the session and redraw if needed.
    ///
    /// Returns the outcome once the session has ended.
    pub fn handle_terminal_event(
        &mut self,
        event: Event,
    ) -> Result<Option<SessionOutcome>, TuiError> {
        let Some(event) = SessionEvent::from_terminal(event) else {
            return Ok(None);
        };

        match self.session.handle_event(event) {
            Flow::Idle => Ok(None),
            Flow::Redraw => {
                self.draw()?;
                Ok(None)
            }
            Flow::Exit(outcome) => {
                debug!(?outcome, "leaving event loop");
                Ok(Some(outcome))
            }
        }
    }

    /// Clear and repaint the whole overlay.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let session = &self.session;
        self.terminal.draw(|frame| render_session(frame, session))?;
        Ok(())
    }
}

/// Render the prompt row and any startup error.
pub fn render_session<P, S>(frame: &mut Frame, session: &SessionController<P, S>)
where
    P: PaneController,
    S: SessionStore,
{
    let area = frame.area();
    let view = PromptView::new(
        session.prompt(),
        session.text(),
        session.edit_state().buffer().cursor_column(),
    )
    .marked(session.is_marked())
    .show_prompt(!session.targets().is_empty())
    .error(session.pending_error().map(ToString::to_string));

    let cursor = view.cursor_position(area);
    frame.render_widget(view, area);
    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

/// Take over the terminal: raw mode, alternate screen, bracketed paste,
/// no line wrapping, window title.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    stdout.execute(DisableLineWrap)?;
    stdout.execute(SetTitle(WINDOW_TITLE))?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore terminal to normal state
///
/// Disables raw mode and bracketed paste, re-enables line wrapping and
/// leaves the alternate screen.
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableBracketedPaste)?;
    stdout.execute(EnableLineWrap)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Initialize and run the TUI for `session`, always restoring the terminal.
pub fn run_session<P, S>(session: SessionController<P, S>) -> Result<SessionOutcome, TuiError>
where
    P: PaneController,
    S: SessionStore,
{
    drive(session, setup_terminal, event::read, restore_terminal)
}

/// Set up, run and restore, with the terminal plumbing passed in.
///
/// The session is finished as cancelled when setup fails, so markers created
/// at startup are removed on every path. A restore failure is logged and
/// never replaces the session outcome.
fn drive<B, P, S, Setup, Next, Restore>(
    mut session: SessionController<P, S>,
    setup: Setup,
    next_event: Next,
    restore: Restore,
) -> Result<SessionOutcome, TuiError>
where
    B: ratatui::backend::Backend,
    P: PaneController,
    S: SessionStore,
    Setup: FnOnce() -> Result<Terminal<B>, TuiError>,
    Next: FnMut() -> io::Result<Event>,
    Restore: FnOnce() -> Result<(), TuiError>,
{
    let terminal = match setup() {
        Ok(terminal) => terminal,
        Err(err) => {
            error!(error = %err, "terminal setup failed, cancelling session");
            session.finish(SessionOutcome::Cancelled);
            if let Err(restore_err) = restore() {
                warn!(error = %restore_err, "could not restore terminal");
            }
            return Err(err);
        }
    };

    let mut app = TuiApp::with_terminal(terminal, session);
    let result = app.run(next_event);

    if let Err(err) = restore() {
        warn!(error = %err, "could not restore terminal");
    }

    result
}
