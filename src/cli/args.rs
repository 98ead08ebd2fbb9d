//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::application::Side;
use crate::cli::action::Action;

/// Two-pane transfer list: move subtrees between trees and reorder siblings
#[derive(Parser, Debug)]
#[command(name = "treexfer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Project directory holding .treexfer.toml (default: cwd)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Seed file overriding the configured one
    #[arg(short, long, global = true, env = "TREEXFER_SEED_FILE")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show both panes
    Show,

    /// List the selectable ids of one pane
    List {
        /// Pane
        #[arg(value_enum)]
        side: PaneArg,
    },

    /// Apply actions in order, then show the result
    Run {
        /// Actions: select-left=ID select-right=ID clear to-right[=ID] to-left[=ID] up down
        #[arg(num_args = 1.., required = true)]
        actions: Vec<Action>,
    },

    /// Read actions from stdin, one per line, showing the panes after each
    Shell,

    /// Pick a node interactively (fzf-style) and show its preview
    Pick {
        /// Pane
        #[arg(value_enum)]
        side: PaneArg,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print config template to stdout
    Init,

    /// Show config paths
    Path,
}

/// Pane selector on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaneArg {
    Left,
    Right,
}

impl From<PaneArg> for Side {
    fn from(value: PaneArg) -> Self {
        match value {
            PaneArg::Left => Side::Left,
            PaneArg::Right => Side::Right,
        }
    }
}
