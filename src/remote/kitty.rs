//! [`PaneController`] backed by kitty's remote-control command line.

use super::{OsWindow, PaneController, ScrollDirection};
use crate::config::ResolvedConfig;
use crate::model::{RemoteError, WindowId};
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// Runs `kitty @ <subcommand>` (or a configured equivalent) synchronously.
#[derive(Debug, Clone)]
pub struct KittyRemote {
    program: String,
    prefix: Vec<String>,
    listen_on: Option<String>,
}

impl KittyRemote {
    /// Build from a command prefix such as `["kitty", "@"]`.
    pub fn new(command: &[String], listen_on: Option<String>) -> Result<Self, RemoteError> {
        let (program, prefix) = command.split_first().ok_or(RemoteError::EmptyCommand)?;
        Ok(Self {
            program: program.clone(),
            prefix: prefix.to_vec(),
            listen_on,
        })
    }

    /// Build from the resolved `remote_command` and `listen_on`.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self, RemoteError> {
        Self::new(&config.remote_command, config.listen_on.clone())
    }

    /// Full argument vector (excluding the program) for a subcommand.
    pub fn command_args(&self, subcommand: &[String]) -> Vec<String> {
        let mut args = self.prefix.clone();
        if let Some(addr) = &self.listen_on {
            args.push(format!("--to={addr}"));
        }
        args.extend(subcommand.iter().cloned());
        args
    }

    fn render(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self, subcommand: Vec<String>, capture_stdout: bool) -> Result<Output, RemoteError> {
        let args = self.command_args(&subcommand);
        debug!(command = %self.render(&args), "remote control");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(if capture_stdout {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| RemoteError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(RemoteError::CommandFailed {
                command: self.render(&args),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    /// Enumerate OS windows, tabs and windows.
    pub fn list_windows(&self) -> Result<Vec<OsWindow>, RemoteError> {
        let output = self.run(vec!["ls".to_string()], true)?;
        Ok(serde_json::from_slice(&output.stdout)?)
    }

    /// Shrink the overlay window itself to a single row.
    pub fn shrink_self(&self) -> Result<(), RemoteError> {
        self.run(shrink_self_args(), false).map(drop)
    }
}

impl PaneController for KittyRemote {
    fn create_marker(
        &mut self,
        pane: WindowId,
        match_type: &str,
        slot: u8,
        query: &str,
    ) -> Result<(), RemoteError> {
        self.run(create_marker_args(pane, match_type, slot, query), false)
            .map(drop)
    }

    fn remove_marker(&mut self, pane: WindowId) -> Result<(), RemoteError> {
        self.run(remove_marker_args(pane), false).map(drop)
    }

    fn scroll_to_mark(
        &mut self,
        pane: WindowId,
        direction: ScrollDirection,
    ) -> Result<(), RemoteError> {
        self.run(scroll_to_mark_args(pane, direction), false)
            .map(drop)
    }

    fn scroll_to_end(&mut self, pane: WindowId) -> Result<(), RemoteError> {
        self.run(scroll_to_end_args(pane), false).map(drop)
    }
}

fn create_marker_args(pane: WindowId, match_type: &str, slot: u8, query: &str) -> Vec<String> {
    vec![
        "create-marker".to_string(),
        pane.match_arg(),
        match_type.to_string(),
        slot.to_string(),
        query.to_string(),
    ]
}

fn remove_marker_args(pane: WindowId) -> Vec<String> {
    vec!["remove-marker".to_string(), pane.match_arg()]
}

fn scroll_to_mark_args(pane: WindowId, direction: ScrollDirection) -> Vec<String> {
    let mut args = vec![
        "kitten".to_string(),
        pane.match_arg(),
        "scroll_mark.py".to_string(),
    ];
    if direction == ScrollDirection::Next {
        args.push("next".to_string());
    }
    args
}

fn scroll_to_end_args(pane: WindowId) -> Vec<String> {
    vec![
        "scroll-window".to_string(),
        pane.match_arg(),
        "end".to_string(),
    ]
}

fn shrink_self_args() -> Vec<String> {
    ["resize-window", "--self", "--axis=vertical", "--increment", "-100"]
        .map(String::from)
        .to_vec()
}
