//! Command dispatch and pane rendering

use std::io::BufRead;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::services::TransferService;
use crate::application::Side;
use crate::cli::action::Action;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render::OutlineConvert;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::TreeArena;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::SelectionItem;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = resolve_project_dir(cli.project_dir.as_ref());
    let mut settings = Settings::load(project_dir.as_deref())?;
    if let Some(seed) = &cli.seed {
        settings.seed_file = Some(seed.clone());
    }
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Show) | None => cmd_show(&ServiceContainer::new(settings)),
        Some(Commands::List { side }) => cmd_list(&ServiceContainer::new(settings), (*side).into()),
        Some(Commands::Run { actions }) => cmd_run(&ServiceContainer::new(settings), actions),
        Some(Commands::Shell) => cmd_shell(&ServiceContainer::new(settings)),
        Some(Commands::Pick { side }) => cmd_pick(&ServiceContainer::new(settings), (*side).into()),
        Some(Commands::Config { command }) => cmd_config(&settings, command, project_dir.as_deref()),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn resolve_project_dir(project_dir: Option<&PathBuf>) -> Option<PathBuf> {
    project_dir
        .cloned()
        .or_else(|| std::env::current_dir().ok())
}

fn cmd_show(container: &ServiceContainer) -> CliResult<()> {
    let service = container.transfer_service()?;
    output::info(&render_panes(&service, container.settings.preview));
    Ok(())
}

fn cmd_list(container: &ServiceContainer, side: Side) -> CliResult<()> {
    let service = container.transfer_service()?;
    for id in service.pane(side).items() {
        output::info(id);
    }
    Ok(())
}

fn cmd_run(container: &ServiceContainer, actions: &[Action]) -> CliResult<()> {
    let mut service = container.transfer_service()?;
    run_actions(&mut service, actions)?;
    output::info(&render_panes(&service, container.settings.preview));
    Ok(())
}

fn cmd_shell(container: &ServiceContainer) -> CliResult<()> {
    let mut service = container.transfer_service()?;
    output::info(&render_panes(&service, container.settings.preview));

    let stdin = std::io::stdin();
    output::prompt(">");
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| InfraError::io("read stdin", e))?;
        let line = line.trim();
        match line {
            "" => {}
            "quit" | "exit" => break,
            _ if line.starts_with('#') => {}
            _ => match line.parse::<Action>() {
                Ok(action) => {
                    if let Err(e) = action.apply(&mut service) {
                        output::error(&e);
                    }
                    output::info(&render_panes(&service, container.settings.preview));
                }
                Err(e) => output::warning(&e),
            },
        }
        output::prompt(">");
    }
    Ok(())
}

fn cmd_pick(container: &ServiceContainer, side: Side) -> CliResult<()> {
    let mut service = container.transfer_service()?;
    match pick_node(container, &service, side)? {
        Some(id) => {
            service.select(side, Some(id.as_str()))?;
            output::action("Selected", &id);
            output::info(&render_panes(&service, container.settings.preview));
        }
        None => output::warning("nothing selected"),
    }
    Ok(())
}

fn cmd_config(
    settings: &Settings,
    command: &ConfigCommands,
    project_dir: Option<&std::path::Path>,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Init => output::info(&Settings::template()),
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".into());
            output::action("global", &global);
            if let Some(dir) = project_dir {
                output::action("local", &local_config_path(dir).display());
            }
        }
    }
    Ok(())
}

/// Applies `actions` in order, stopping at the first failure.
#[instrument(level = "debug", skip(service))]
pub fn run_actions(service: &mut TransferService, actions: &[Action]) -> CliResult<()> {
    for action in actions {
        let changed = action.apply(service)?;
        debug!("{}: changed={}", action, changed);
    }
    Ok(())
}

/// Lets the user pick a node of `side` through the configured selector.
pub fn pick_node(
    container: &ServiceContainer,
    service: &TransferService,
    side: Side,
) -> CliResult<Option<String>> {
    let pane = service.pane(side);
    if pane.items().is_empty() {
        return Err(CliError::Usage(format!("{side} pane is empty")));
    }
    let items: Vec<SelectionItem> = pane
        .items()
        .iter()
        .map(|id| SelectionItem {
            display: format!(
                "{}{}",
                "  ".repeat(pane.tree().find_path(id).len().saturating_sub(2)),
                id
            ),
            value: id.clone(),
        })
        .collect();
    let picked = container
        .selector
        .select_one(&items, &container.settings.picker.prompt)
        .map_err(|message| InfraError::Selector { message })?;
    Ok(picked.map(|item| item.value))
}

/// Both panes as outlines, the selection state and optionally the preview.
pub fn render_panes(service: &TransferService, preview: bool) -> String {
    let selection = service.selection();
    let mut out = Vec::new();

    for side in [Side::Left, Side::Right] {
        let pane = service.pane(side);
        out.push(output::header(&format!("{side} ({})", pane.items().len())));
        out.push(render_tree(pane.tree(), service.selected(side)));
    }

    match selection {
        Some(sel) => {
            let affordances = service.affordances();
            out.push(format!(
                "selected: {} [{}]  {}  {}",
                output::selected(&sel.id),
                sel.side,
                output::flag("up", affordances.up),
                output::flag("down", affordances.down)
            ));
            if preview {
                out.push(output::header("preview"));
                out.push(sel.preview.to_outline().to_string().trim_end().to_string());
            }
        }
        None => out.push("selected: -".to_string()),
    }
    out.iter().join("\n")
}

fn render_tree(tree: &TreeArena, selected: Option<&str>) -> String {
    tree.to_outline()
        .to_string()
        .lines()
        .map(|line| match selected {
            Some(id) if line.rsplit(' ').next() == Some(id) => {
                let prefix = &line[..line.len() - id.len()];
                format!("{prefix}{}", output::selected(id))
            }
            _ => line.to_string(),
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Node;

    fn service() -> TransferService {
        colored::control::set_override(false);
        TransferService::from_seed(&Node::seed()).unwrap()
    }

    #[test]
    fn given_actions_when_running_then_applies_in_order() {
        let mut service = service();
        let actions: Vec<Action> = ["select-left=node2-1", "to-right", "up"]
            .iter()
            .map(|a| a.parse().unwrap())
            .collect();

        run_actions(&mut service, &actions).unwrap();

        assert_eq!(
            service.right().items(),
            ["node2", "node2-1", "node2-1-1", "node2-1-2"]
        );
        assert!(!service.left().items().contains(&"node2-1".to_string()));
    }

    #[test]
    fn given_selection_when_rendering_then_shows_affordances_and_preview() {
        let mut service = service();
        service.select_left("node1-2").unwrap();

        let text = render_panes(&service, true);

        assert!(text.contains("left (12)"));
        assert!(text.contains("right (0)"));
        assert!(text.contains("selected: node1-2 [left]"));
        assert!(text.contains("preview"));
    }

    #[test]
    fn given_preview_disabled_when_rendering_then_omits_preview() {
        let mut service = service();
        service.select_left("node1").unwrap();

        let text = render_panes(&service, false);

        assert!(!text.contains("preview"));
    }
}
