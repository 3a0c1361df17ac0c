use std::io;
use std::process::ExitCode;

use clap::Parser;
use rfdetr_weights::cli::Cli;
use rfdetr_weights::report;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Cli::parse().into_config();
    let outcome = report::run(&config);

    if let Err(e) = outcome.render(&mut io::stdout()) {
        eprintln!("failed to print report: {}", e);
    }

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
