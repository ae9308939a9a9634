use anyhow::{Context, Result};
use clap::Parser;
use mathwiz::cli::{Cli, Command};
use mathwiz::config::Config;
use mathwiz::{script, ui};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding log filter directives.
const LOG_ENV: &str = "MATHWIZ_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.command.is_none();
    init_logging(cli.verbose, cli.log_file.as_deref(), interactive)?;

    match &cli.command {
        Some(Command::Eval { json, keys }) => eval(keys, *json),
        None => {
            let mut config = Config::load(cli.config.as_deref())?;
            cli.apply_overrides(&mut config);

            let mut app = ui::App::new(config.theme, config.ui.scientific);
            ui::run(&mut app)
        }
    }
}

fn eval(keys: &[String], json: bool) -> Result<()> {
    let session = script::run(keys)?;
    let snapshot = session.snapshot();

    if json {
        let out = serde_json::to_string_pretty(&snapshot).context("failed to serialize result")?;
        println!("{out}");
    } else {
        print!("{}", script::render_report(&snapshot));
    }
    Ok(())
}

/// Set up tracing.
///
/// The interactive UI owns the terminal, so it only logs when a log file is given.
fn init_logging(verbosity: u8, log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("mathwiz={level}")));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
