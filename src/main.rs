use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::io;

use folderforge::cli::{Cli, Command};
use folderforge::commands;
use folderforge::config::Config;
use folderforge::console::Console;
use folderforge::signals::{self, CANCELLED_MESSAGE};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Some(Command::Completions(args)) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "folderforge", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    if let Err(err) = signals::install_interrupt_handler() {
        tracing::warn!(%err, "Could not install interrupt handler");
    }

    let root = match &cli.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let color = config.output.color && !cli.no_color;
    let mode = cli.command.as_ref().and_then(Command::mode);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), color);

    match commands::run(mode, &root, &config, &mut console) {
        Err(err) if err.is_cancelled() => {
            tracing::info!("Session cancelled");
            console.notice(CANCELLED_MESSAGE)?;
            Ok(())
        }
        result => Ok(result?),
    }
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("folderforge={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}
