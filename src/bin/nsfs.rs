//! nsfs CLI Binary
//!
//! Command-line driver for the in-memory namespace.

use anyhow::Context;
use clap::Parser;
use nsfs::logging::init_logging;
use nsfs::tooling::{Cli, CliContext};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let context = CliContext::new(cli.config.clone()).context("loading configuration")?;
    let logging = cli.logging_config(&context.config().logging);
    init_logging(Some(&logging)).context("initializing logging")?;

    let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let output = context
        .with_color(color)
        .execute(&cli.command)
        .context("executing command")?;
    println!("{}", output.text);

    if output.failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
