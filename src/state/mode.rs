//! Owner of the active search mode.

use crate::model::SearchMode;

/// Holds the current [`SearchMode`] and derives the prompt from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeManager {
    mode: SearchMode,
}

impl ModeManager {
    /// Start in `mode`.
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    /// Current mode.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Flip text ↔ regex and return the new mode.
    pub fn toggle(&mut self) -> SearchMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Prompt shown before the query, `=> ` or `~> `.
    pub fn prompt_glyph(&self) -> &'static str {
        self.mode.prompt()
    }
}
