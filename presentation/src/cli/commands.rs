//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for thermo-tutor
#[derive(Parser, Debug)]
#[command(name = "thermo-tutor")]
#[command(author, version, about = "AI tutor for thermodynamic computing")]
#[command(long_about = r#"
Thermo Tutor answers questions about thermodynamic computing: concepts,
equations, and thermal management in computing systems.

Replies come from the Anthropic Messages API. Set your API key once with
--api-key or /key; it is remembered between runs unless --no-persist is given.

Configuration files are loaded from (in priority order):
1. THERMO_TUTOR_* environment variables
2. --config <path>          Explicit config file
3. ./thermo-tutor.toml      Project-level config
4. ~/.config/thermo-tutor/config.toml   Global config

Example:
  thermo-tutor
  thermo-tutor "Why does my GPU throttle at 83C?"
  thermo-tutor --api-key sk-ant-... -m claude-3-5-haiku-20241022
"#)]
pub struct Cli {
    /// Ask one question, print the reply and exit (omit for interactive mode)
    pub prompt: Option<String>,

    /// Set (and remember) the Anthropic API key
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Forget the stored API key and exit
    #[arg(long, conflicts_with_all = ["api_key", "prompt"])]
    pub clear_key: bool,

    /// Model to ask
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum tokens per reply
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Keep the API key in memory only
    #[arg(long)]
    pub no_persist: bool,

    /// Append conversation events to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_interactive_by_default() {
        let cli = Cli::try_parse_from(["thermo-tutor"]).unwrap();
        assert!(cli.prompt.is_none());
        assert!(!cli.clear_key);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_one_shot_with_overrides() {
        let cli = Cli::try_parse_from([
            "thermo-tutor",
            "-m",
            "claude-3-5-haiku-20241022",
            "--max-tokens",
            "256",
            "-vv",
            "--no-persist",
            "What does TDP mean?",
        ])
        .unwrap();
        assert_eq!(cli.prompt.as_deref(), Some("What does TDP mean?"));
        assert_eq!(cli.model.as_deref(), Some("claude-3-5-haiku-20241022"));
        assert_eq!(cli.max_tokens, Some(256));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_persist);
    }

    #[test]
    fn test_clear_key_conflicts_with_prompt() {
        assert!(Cli::try_parse_from(["thermo-tutor", "--clear-key", "hello"]).is_err());
    }

    #[test]
    fn test_max_tokens_must_be_numeric() {
        assert!(Cli::try_parse_from(["thermo-tutor", "--max-tokens", "lots"]).is_err());
    }
}
