//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod interactive;

pub use args::{Args, Command, ConfigAction, RenderOptions};
pub use commands::{
    handle_config_action, resolve_columns, resolve_settings, run_convert, CommandError,
};
pub use enums::{LineEndingArg, SamplingArg};
pub use interactive::{Flow, Interactive, SessionCommand};
