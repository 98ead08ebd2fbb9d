//! CLI layer: argument parsing, actions, rendering and command dispatch

pub mod action;
pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod render;

pub use action::Action;
pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
