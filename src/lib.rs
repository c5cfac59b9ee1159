//! Kitty pane search overlay (pane-search)
//!
//! Incremental search across kitty windows: the overlay edits a query and
//! drives kitty's marker highlighting through remote control.
//!
//! Pure core (`model`, `state`) with an impure shell (`remote`, `store`,
//! `view`) around it.

pub mod config;
pub mod logging;
pub mod model;
pub mod remote;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_harness;
