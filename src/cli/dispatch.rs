use anyhow::{Context, Result};
use clap::CommandFactory;
use promptbox::clipboard::SystemClipboard;
use promptbox::commands::{browse, copy, initial_view_state, list, stages};
use promptbox::completions::generate_completions;
use promptbox::config::Config;
use promptbox::dataset::Dataset;
use promptbox::logging::{self, LogTarget};

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let command = cli.command.unwrap_or(Commands::Browse {
        search: None,
        stage: None,
    });

    let log_target = match (&command, config.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Commands::Browse { .. }, None) => LogTarget::Discard,
        _ => LogTarget::Stderr,
    };
    logging::init(log_target)?;

    if let Commands::Completions { shell } = command {
        let mut cmd = Cli::command();
        generate_completions(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let dataset_path = config.dataset_path(cli.dataset.as_deref());
    let dataset = Dataset::load_or_builtin(dataset_path).context("Failed to load prompts")?;

    match command {
        Commands::Browse { search, stage } => {
            browse::execute(dataset, initial_view_state(stage, search), config.mouse)
        }
        Commands::List {
            search,
            stage,
            json,
        } => list::execute(&dataset, &initial_view_state(stage, search), json),
        Commands::Stages => stages::execute(&dataset),
        Commands::Copy {
            stage_id,
            prompt_id,
        } => copy::execute(&dataset, stage_id, prompt_id, &mut SystemClipboard::new()),
        Commands::Completions { .. } => Ok(()),
    }
}
