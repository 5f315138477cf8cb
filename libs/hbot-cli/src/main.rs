//! `hbot` entry point.

use std::process::ExitCode;

use clap::Parser;
use hbot_cli::{load_catalog, run, Args, BuildConfig, DriverResult};
use tracing::{error, info};

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hbot_cli=info,hbot_parts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match drive() {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn drive() -> DriverResult<ExitCode> {
    let args = Args::parse();

    let config = BuildConfig::from_args(&args)?;
    let catalog = load_catalog(&config)?;
    let report = run(&config, &catalog);

    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        spawn_failures = report.spawn_failures,
        compiler_failures = report.compiler_failures,
        "run finished"
    );
    for (part, err) in &report.failed {
        error!(part = %part, "{err}");
    }
    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
