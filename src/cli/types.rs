use std::path::PathBuf;

use clap::{Parser, Subcommand};
use promptbox::completions::Shell;

const HELP_TEMPLATE: &str = "
 \u{271D}  promptbox

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "promptbox")]
#[command(about = "Browse, search, and copy sermon preparation prompts", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Dataset file to use instead of the built-in prompt set
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Defaults to `browse` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser
    Browse {
        /// Start with this search term
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Start with this stage selected
        #[arg(short, long, value_name = "STAGE_ID")]
        stage: Option<u32>,
    },

    /// Print prompts matching the filters
    List {
        /// Case-insensitive substring to look for (overrides --stage)
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Only show this stage
        #[arg(short, long, value_name = "STAGE_ID")]
        stage: Option<u32>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List stages with their prompt counts
    Stages,

    /// Copy one prompt to the clipboard
    Copy {
        /// Stage containing the prompt
        stage_id: u32,

        /// Prompt id within the stage
        prompt_id: u32,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_browse() {
        let cli = Cli::try_parse_from(["promptbox"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.dataset.is_none());
    }

    #[test]
    fn test_parse_list_filters() {
        let cli =
            Cli::try_parse_from(["promptbox", "list", "-q", "grace", "--stage", "3", "--json"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                search: Some("grace".to_string()),
                stage: Some(3),
                json: true,
            })
        );
    }

    #[test]
    fn test_parse_global_dataset_after_subcommand() {
        let cli = Cli::try_parse_from(["promptbox", "stages", "--dataset", "my.toml"]).unwrap();
        assert_eq!(cli.dataset, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.command, Some(Commands::Stages));
    }

    #[test]
    fn test_copy_requires_numeric_ids() {
        assert!(Cli::try_parse_from(["promptbox", "copy", "1", "x"]).is_err());
        let cli = Cli::try_parse_from(["promptbox", "copy", "2", "7"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Copy {
                stage_id: 2,
                prompt_id: 7
            })
        );
    }

    #[test]
    fn test_completions_shell_is_validated() {
        let cli = Cli::try_parse_from(["promptbox", "completions", "fish"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Fish })
        );
        assert!(Cli::try_parse_from(["promptbox", "completions", "powershell"]).is_err());
    }
}
