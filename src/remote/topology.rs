//! Window topology (`ls` output) and target resolution.

use crate::model::{PaneSet, RemoteError, StartupError, WindowId};
use serde::Deserialize;
use tracing::warn;

/// One top-level OS window as reported by `ls`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OsWindow {
    /// OS window id.
    pub id: u64,
    /// Tabs in display order.
    #[serde(default)]
    pub tabs: Vec<Tab>,
}

/// A tab inside an OS window.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Tab {
    /// Tab id.
    pub id: u64,
    /// Windows (panes) in the tab.
    #[serde(default)]
    pub windows: Vec<WindowInfo>,
}

/// A single window (pane) inside a tab.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WindowInfo {
    /// Window id.
    pub id: WindowId,
    /// Whether this window has keyboard focus (the overlay itself).
    #[serde(default)]
    pub is_focused: bool,
}

/// Outcome of resolving the command-line target.
///
/// `error` is set exactly when `panes` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Windows to search; empty on failure.
    pub panes: PaneSet,
    /// Message to show instead of searching.
    pub error: Option<StartupError>,
}

impl Resolution {
    fn resolved(panes: PaneSet) -> Self {
        Self { panes, error: None }
    }

    fn failed(error: StartupError) -> Self {
        Self {
            panes: PaneSet::empty(),
            error: Some(error),
        }
    }
}

/// Find the tab that contains `id`.
pub fn find_tab(topology: &[OsWindow], id: WindowId) -> Option<&Tab> {
    topology
        .iter()
        .flat_map(|os_window| os_window.tabs.iter())
        .find(|tab| tab.windows.iter().any(|w| w.id == id))
}

/// Resolve the set of windows to search.
///
/// `list_windows` is only called for `--all-windows`. A failing listing is
/// logged and treated like an empty topology.
pub fn resolve_pane_set<F>(window_arg: Option<&str>, all_windows: bool, list_windows: F) -> Resolution
where
    F: FnOnce() -> Result<Vec<OsWindow>, RemoteError>,
{
    let Some(id) = window_arg.and_then(|raw| WindowId::parse(raw).ok()) else {
        return Resolution::failed(StartupError::MissingWindowId);
    };

    if !all_windows {
        return Resolution::resolved(PaneSet::single(id));
    }

    let topology = list_windows().unwrap_or_else(|err| {
        warn!(error = %err, "failed to list windows");
        Vec::new()
    });

    let Some(tab) = find_tab(&topology, id) else {
        return Resolution::failed(StartupError::WindowNotFound);
    };

    let panes = PaneSet::from_ids(tab.windows.iter().filter(|w| !w.is_focused).map(|w| w.id));
    if panes.is_empty() {
        Resolution::failed(StartupError::NoTargetWindows)
    } else {
        Resolution::resolved(panes)
    }
}
