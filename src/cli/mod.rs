//! Command-line interface definition

use crate::config::env::EnvManager;
use clap::Parser;
use std::path::PathBuf;

/// Pretty-print benchmark YAML streams or diff the two newest runs
#[derive(Parser, Debug, Clone)]
#[command(name = "perfdiff")]
#[command(version, about, long_about = None)]
#[command(after_help = after_help())]
pub struct Cli {
    /// Subtract the previous run from the newest run and print the deltas
    #[arg(short = 'd', long = "diff")]
    pub diff: bool,

    /// Pretty-print every parsed document
    #[arg(short = 'v', long = "verbatim")]
    pub verbatim: bool,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Minimum log level written to stderr (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Log line format (console, json, compact)
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<String>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Input files, concatenated in order; stdin when omitted
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

const INPUT_HELP: &str = "\
Input is a YAML stream mapping test names to lists of records with
xfer_size, Gb/sec and usec/xfer fields. Several files are joined as raw
text before parsing.";

/// Text shown after the option list
pub fn after_help() -> String {
    format!("{}\n\n{}", INPUT_HELP, EnvManager::display_env_help())
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.files.iter().any(|f| f.as_os_str().is_empty()) {
            return Err("Input file path cannot be empty".to_string());
        }

        Ok(())
    }

    /// Color preference given on the command line, if any
    pub fn color_override(&self) -> Option<bool> {
        if self.color {
            Some(true)
        } else if self.no_color {
            Some(false)
        } else {
            None
        }
    }
}

/// Check if the terminal supports color output
pub fn supports_color() -> bool {
    use std::io::IsTerminal;

    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing_basic() {
        let cli = Cli::parse_from(["perfdiff", "-d", "run.yaml"]);
        assert!(cli.diff);
        assert!(!cli.verbatim);
        assert_eq!(cli.files, vec![PathBuf::from("run.yaml")]);
    }

    #[test]
    fn test_cli_parsing_all_options() {
        let cli = Cli::parse_from([
            "perfdiff",
            "-d", "-v",
            "--no-color",
            "--log-level", "debug",
            "--log-format", "json",
            "--debug",
            "a.yaml", "b.yaml",
        ]);

        assert!(cli.diff);
        assert!(cli.verbatim);
        assert!(cli.no_color);
        assert!(cli.debug);
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.log_format.as_deref(), Some("json"));
        assert_eq!(cli.files.len(), 2);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_combined_short_flags() {
        let cli = Cli::parse_from(["perfdiff", "-dv"]);
        assert!(cli.diff);
        assert!(cli.verbatim);
        assert!(cli.files.is_empty());
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::parse_from(["perfdiff"]);
        assert!(!cli.diff);
        assert!(!cli.verbatim);
        assert_eq!(cli.color_override(), None);
    }

    #[test]
    fn test_color_flags_conflict() {
        assert!(Cli::try_parse_from(["perfdiff", "--color", "--no-color"]).is_err());
    }

    #[test]
    fn test_color_override() {
        let cli = Cli::parse_from(["perfdiff", "--color"]);
        assert_eq!(cli.color_override(), Some(true));
        let cli = Cli::parse_from(["perfdiff", "--no-color"]);
        assert_eq!(cli.color_override(), Some(false));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["perfdiff", "-x"]).is_err());
    }

    #[test]
    fn test_after_help_lists_supported_env_vars() {
        let help = after_help();
        assert!(help.starts_with("Input is a YAML stream"));
        for (var, description, _) in EnvManager::get_supported_env_vars() {
            assert!(help.contains(var));
            assert!(help.contains(description));
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
