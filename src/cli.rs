use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::converter::Mode;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "

License: MIT
Rust Edition: 2024"
);

#[derive(Parser)]
#[command(name = "nlconv")]
#[command(about = "Convert between literal '\\n' sequences and real newlines in a text file")]
#[command(long_about = "nlconv rewrites a text file in place, converting between literal
backslash-n sequences and real newline characters.

Run without arguments for the interactive prompts. The file path and the
conversion mode can also be supplied up front, which skips the matching
prompt.

MODES:
  1 - replace literal '\\n' sequences with real newlines
  2 - replace real newlines with literal '\\n' sequences

The conversion is plain substring replacement: text that already contains a
literal '\\n' which was never an escaped newline is converted too. The file
is overwritten in place, with no backup.

EXAMPLES:
  nlconv                          Prompt for path and mode
  nlconv notes.txt                Prompt for mode only
  nlconv -m 2 notes.txt           Escape newlines in notes.txt
  nlconv config --show            Show current configuration")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
#[command(propagate_version = true)]
struct Cli {
    /// File to convert (prompted for when omitted)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Conversion mode: 1 or 2
    #[arg(short = 'm', long, value_name = "MODE")]
    #[arg(help = "Conversion mode\n1 = replace literal '\\n' with newlines\n2 = replace newlines with literal '\\n'")]
    mode: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show configuration
    #[command(long_about = "Show the nlconv configuration.

Prints the path of the configuration file (~/.nlconv/config.toml), creating a
default commented one when missing.

CONFIGURATION OPTIONS:
  [conversion]
    default_mode = \"1\"    # Skip the mode prompt (\"1\" or \"2\")

  [logging]
    debug = false           # Log operations to ~/.nlconv/nlconv.log

EXAMPLES:
  nlconv config                   Show configuration file path
  nlconv config --show            Show current configuration values")]
    Config {
        /// Show current configuration values
        #[arg(long = "show")]
        show: bool,
    },
}

pub fn parse_args() -> Result<Args> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show }) => Ok(Args::Config { show }),
        None => {
            // An unknown --mode value goes through the same "Invalid choice."
            // path as a bad prompt answer, so it is kept as a raw selector.
            let mode = cli.mode.as_deref().map(ModeArg::from_selector);

            Ok(Args::Run {
                file: cli.file,
                mode,
            })
        }
    }
}

/// A mode selector given on the command line, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Valid(Mode),
    Invalid,
}

impl ModeArg {
    fn from_selector(selector: &str) -> ModeArg {
        match Mode::from_selector(selector) {
            Some(mode) => ModeArg::Valid(mode),
            None => ModeArg::Invalid,
        }
    }
}

#[derive(Debug)]
pub enum Args {
    Run {
        file: Option<String>,
        mode: Option<ModeArg>,
    },
    Config {
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_arg_valid_selectors() {
        assert_eq!(ModeArg::from_selector("1"), ModeArg::Valid(Mode::UnescapeNewlines));
        assert_eq!(ModeArg::from_selector("2"), ModeArg::Valid(Mode::EscapeNewlines));
    }

    #[test]
    fn test_mode_arg_invalid_selector() {
        assert_eq!(ModeArg::from_selector("3"), ModeArg::Invalid);
        assert_eq!(ModeArg::from_selector("escape"), ModeArg::Invalid);
    }
}
