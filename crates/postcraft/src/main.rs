//! Postcraft CLI binary.
//!
//! This binary drives one session through the content pipeline:
//! - Pick a topic and generate post ideas
//! - Generate the English LinkedIn post and blog article for an idea
//! - Translate both to French

use clap::Parser;
use postcraft::{
    ObservabilityConfig, Postcraft, PostcraftConfig, PostcraftResult, init_observability,
};
use std::process::ExitCode;

mod cli;

async fn run(cli: cli::Cli) -> PostcraftResult<()> {
    let config = PostcraftConfig::load()?;

    // Initialize tracing
    let mut observability = ObservabilityConfig::new(config.logging().level().clone())
        .with_json_logs(cli.json_logs || *config.logging().json());
    if cli.verbose {
        observability = observability.with_forced_level("debug");
    }
    init_observability(&observability)?;

    let app = Postcraft::from_config(&config)?;
    cli::handle_command(&app, cli.session.as_deref(), cli.command).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
