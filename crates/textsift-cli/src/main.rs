//! Textsift CLI - Extract structured text from a document.
//!
//! stdout carries exactly one JSON document; logs go to stderr.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use textsift_cli::runner::{build_pipeline, run_with_timeout};
use textsift_cli::{Cli, Formatter, OutputFormat, USAGE_ERROR};
use textsift_extractor::{ResultDocument, RunStatus};
use tracing::Level;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered.lines().next().unwrap_or(USAGE_ERROR).trim();
            let message = message.strip_prefix("error: ").unwrap_or(message);
            return emit_error(&Formatter::new(OutputFormat::Json), message);
        }
    };

    init_tracing(cli.log_level());

    let formatter = Formatter::new(if cli.pretty {
        OutputFormat::Pretty
    } else {
        OutputFormat::Json
    });

    match run(&cli, &formatter) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            emit_error(&formatter, &format!("{:#}", e))
        }
    }
}

fn run(cli: &Cli, formatter: &Formatter) -> anyhow::Result<ExitCode> {
    let pipeline = build_pipeline(cli).context("failed to initialize")?;

    if cli.probe {
        println!("{}", formatter.format_capabilities(pipeline.capabilities())?);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(source) = cli.source() else {
        return Ok(emit_error(formatter, USAGE_ERROR));
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    let output = runtime.block_on(run_with_timeout(
        Arc::new(pipeline),
        source,
        Duration::from_secs(cli.timeout_secs),
    ));
    // A timed-out extraction may still be running; do not wait for it
    runtime.shutdown_background();

    println!("{}", formatter.format_document(&output.document)?);

    Ok(match output.status {
        RunStatus::InputError => ExitCode::FAILURE,
        RunStatus::Completed | RunStatus::Fallback => ExitCode::SUCCESS,
    })
}

/// Print an error-shaped document and return the failure exit code.
fn emit_error(formatter: &Formatter, message: &str) -> ExitCode {
    let document = ResultDocument::error_document(message);
    match formatter.format_document(&document) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
    ExitCode::FAILURE
}

fn init_tracing(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
