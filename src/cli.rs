//! Command-line arguments.

use crate::config::Config;
use crate::theme::AccentColor;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mathwiz",
    version,
    about = "A terminal calculator with memory, scientific functions and history."
)]
pub struct Cli {
    /// Config file (default: <config dir>/mathwiz/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Calculator name shown in the header
    #[arg(long)]
    pub name: Option<String>,

    /// Accent color: orange, blue, green, purple, red, pink, teal or amber
    #[arg(long, value_name = "COLOR")]
    pub accent: Option<AccentColor>,

    /// Start with the scientific functions visible
    #[arg(long)]
    pub scientific: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Press a sequence of keys and print the result
    Eval {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Key names, e.g. `7 x 6 =` or `12.5 M+ MR sqrt`
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
        keys: Vec<String>,
    },
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(name) = &self.name {
            config.theme.rename(name);
        }
        if let Some(accent) = self.accent {
            config.theme.accent = accent;
        }
        if self.scientific {
            config.ui.scientific = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_interactive_flags() {
        let cli =
            Cli::try_parse_from(["mathwiz", "--accent", "teal", "--name", "Desk", "-vv"]).unwrap();
        assert_eq!(cli.accent, Some(AccentColor::Teal));
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.theme.name, "Desk");
        assert_eq!(config.theme.accent, AccentColor::Teal);
        assert!(!config.ui.scientific);
    }

    #[test]
    fn test_parse_eval_keys_with_hyphens() {
        let cli =
            Cli::try_parse_from(["mathwiz", "eval", "--json", "9", "-", "4", "M-", "="]).unwrap();
        match cli.command {
            Some(Command::Eval { json, keys }) => {
                assert!(json);
                assert_eq!(keys, ["9", "-", "4", "M-", "="]);
            }
            None => panic!("expected eval subcommand"),
        }
    }

    #[test]
    fn test_unknown_accent_rejected() {
        assert!(Cli::try_parse_from(["mathwiz", "--accent", "mauve"]).is_err());
    }

    #[test]
    fn test_eval_requires_keys() {
        assert!(Cli::try_parse_from(["mathwiz", "eval"]).is_err());
    }
}
