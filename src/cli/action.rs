//! User actions on the transfer list, as typed on the command line or in the shell.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::application::services::TransferService;
use crate::application::{ApplicationResult, Side};
use crate::cli::error::CliError;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select { side: Side, id: String },
    Clear,
    /// Move to the other pane; without an id the current selection of the
    /// source pane is moved
    Transfer { from: Side, id: Option<String> },
    Up,
    Down,
}

impl Action {
    /// Applies the action. Returns whether the panes changed.
    pub fn apply(&self, service: &mut TransferService) -> ApplicationResult<bool> {
        match self {
            Action::Select { side, id } => {
                service.select(*side, Some(id.as_str()))?;
                Ok(false)
            }
            Action::Clear => {
                service.clear_selection();
                Ok(false)
            }
            Action::Transfer { from, id } => {
                let target = id
                    .clone()
                    .or_else(|| service.selected(*from).map(str::to_string));
                match target {
                    Some(id) => service.move_across(*from, &id),
                    None => {
                        debug!("apply: nothing selected in {} pane", from);
                        Ok(false)
                    }
                }
            }
            Action::Up => service.move_up(),
            Action::Down => service.move_down(),
        }
    }
}

impl FromStr for Action {
    type Err = CliError;

    /// Parses `name`, `name=arg` or `name arg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(|c: char| c == '=' || c.is_whitespace()) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (s, None),
        };
        let require = |what: &str| {
            arg.map(str::to_string)
                .ok_or_else(|| CliError::InvalidArgs(format!("{what} requires a node id")))
        };

        match name {
            "select-left" => Ok(Action::Select {
                side: Side::Left,
                id: require(name)?,
            }),
            "select-right" => Ok(Action::Select {
                side: Side::Right,
                id: require(name)?,
            }),
            "clear" => Ok(Action::Clear),
            "to-right" => Ok(Action::Transfer {
                from: Side::Left,
                id: arg.map(str::to_string),
            }),
            "to-left" => Ok(Action::Transfer {
                from: Side::Right,
                id: arg.map(str::to_string),
            }),
            "up" => Ok(Action::Up),
            "down" => Ok(Action::Down),
            other => Err(CliError::InvalidArgs(format!("unknown action: {other}"))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Select { side, id } => write!(f, "select-{side}={id}"),
            Action::Clear => write!(f, "clear"),
            Action::Transfer { from, id } => {
                write!(f, "to-{}", from.other())?;
                if let Some(id) = id {
                    write!(f, "={id}")?;
                }
                Ok(())
            }
            Action::Up => write!(f, "up"),
            Action::Down => write!(f, "down"),
        }
    }
}
