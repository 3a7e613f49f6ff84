use clap::{Command, ValueEnum};
use clap_complete::{generate, shells};
use std::io::Write;

/// Target shell for `promptbox completions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

/// Write the completion script for `cmd` to `out`
///
/// # Example
///
/// ```no_run
/// use clap::Command;
/// use promptbox::completions::{generate_completions, Shell};
///
/// let mut cmd = Command::new("promptbox");
/// generate_completions(&mut cmd, Shell::Zsh, &mut std::io::stdout());
/// ```
pub fn generate_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, out),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, out),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_value_names() {
        assert_eq!(Shell::from_str("bash", true), Ok(Shell::Bash));
        assert_eq!(Shell::from_str("ZSH", true), Ok(Shell::Zsh));
        assert!(Shell::from_str("powershell", true).is_err());
    }

    #[test]
    fn test_generate_bash_script_names_binary() {
        let mut cmd = Command::new("promptbox").subcommand(Command::new("list"));
        let mut out = Vec::new();
        generate_completions(&mut cmd, Shell::Bash, &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("promptbox"));
        assert!(script.contains("list"));
    }

    #[test]
    fn test_generate_fish_script() {
        let mut cmd = Command::new("promptbox").subcommand(Command::new("stages"));
        let mut out = Vec::new();
        generate_completions(&mut cmd, Shell::Fish, &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("complete -c promptbox"));
    }
}
