//! `fixturegen` - command-line front end for fixturegen-core.
//!
//! Usage: `fixturegen <image> [options]`. Writes `<stem>_0.jpg` through
//! `<stem>_8.jpg` and prints one log block per file.

mod cli;
mod report;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fixturegen_core::{verify_report, Generator};

fn main() -> ExitCode {
    let Some(cli) = cli::parse_args() else {
        return ExitCode::SUCCESS;
    };
    init_logging(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &cli::Cli) -> anyhow::Result<()> {
    let generator = Generator::new(cli.generator_config(), cli.tagger());
    debug!(config = ?generator.config(), tagger = ?cli.tagger, "starting generation");
    let report = generator
        .generate(&cli.image)
        .with_context(|| format!("generating fixtures from {}", cli.image.display()))?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        report::print_json(&report, &mut stdout)?;
    } else {
        report::print_log(&report, &mut stdout)?;
    }

    if cli.verify {
        verify_report(&cli.image, &report).context("verifying generated fixtures")?;
        info!(count = report.produced.len(), "all fixtures verified");
    }
    Ok(())
}
