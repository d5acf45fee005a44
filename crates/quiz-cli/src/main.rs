use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use quiz_db::error::{DatabaseError, ErrorKind};

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(&error),
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config(&flags).context("failed to load configuration")?;
    let ctx = context::AppContext::init(config).await?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Print the error and pick the process exit code.
///
/// Storage detail goes to the log only; the user sees the client message.
fn report(error: &anyhow::Error) -> ExitCode {
    let Some(db_error) = error.downcast_ref::<DatabaseError>() else {
        eprintln!("quiz error: {error:#}");
        return ExitCode::FAILURE;
    };

    let code = match db_error.kind() {
        ErrorKind::Validation => 2,
        ErrorKind::NotFound => 3,
        ErrorKind::Storage => {
            tracing::error!(error = %format!("{error:#}"), "storage failure");
            1
        }
    };
    eprintln!("quiz error: {}", db_error.client_message());
    ExitCode::from(code)
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("QUIZ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
