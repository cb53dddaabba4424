mod cli;
mod config;
mod converter;
mod logger;
mod session;

use anyhow::Result;
use cli::{parse_args, Args, ModeArg};
use converter::Mode;
use session::SessionOptions;
use std::io;

fn main() -> Result<()> {
    let args = parse_args()?;

    match args {
        Args::Run { file, mode } => {
            run(file, mode)?;
        }
        Args::Config { show } => {
            show_config(show)?;
        }
    }

    Ok(())
}

fn run(file: Option<String>, mode: Option<ModeArg>) -> Result<()> {
    let config = config::load_config().unwrap_or_default();

    let debug_enabled = config.logging.debug.unwrap_or(false);
    logger::init_debug_logging(debug_enabled)?;

    // --mode wins over the config default; a bad selector from either source
    // is reported the same way as a bad prompt answer.
    let mode = match resolve_mode(mode, &config) {
        Ok(mode) => mode,
        Err(()) => {
            println!("Invalid choice.");
            return Ok(());
        }
    };

    let options = SessionOptions { file, mode };

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run_session(&mut stdin.lock(), &mut stdout.lock(), &options)?;

    Ok(())
}

fn resolve_mode(arg: Option<ModeArg>, config: &config::Config) -> Result<Option<Mode>, ()> {
    match arg {
        Some(ModeArg::Valid(mode)) => Ok(Some(mode)),
        Some(ModeArg::Invalid) => Err(()),
        None => match config.conversion.default_mode.as_deref() {
            Some(selector) => Mode::from_selector(selector).map(Some).ok_or(()),
            None => Ok(None),
        },
    }
}

fn show_config(show: bool) -> Result<()> {
    let config_path = config::config_file_path()?;

    if !config_path.exists() {
        config::save_default_config()?;
        println!("Created default config: {}", config_path.display());
    }

    if show {
        let config = config::load_config()?;
        println!("Configuration ({}):\n", config_path.display());
        print!("{}", toml::to_string_pretty(&config)?);
    } else {
        println!("Config file: {}", config_path.display());
        println!("Edit it with your preferred editor, or run 'nlconv config --show' to view values.");
    }

    Ok(())
}
