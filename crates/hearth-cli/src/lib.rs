//! # hearth-cli
//!
//! Command-line interface for the Hearth agent.
//!
//! ## Commands
//!
//! - `hearth` / `hearth chat` — Interactive chat in the terminal
//! - `hearth eval` — Replay the scripted scenarios once and exit
//! - `hearth config` — Show the effective configuration
//! - `hearth memory` — Inspect or edit remembered facts
//! - `hearth tools` — List the built-in tools

pub mod commands;

pub use commands::Cli;
