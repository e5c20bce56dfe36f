use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use memegen::cli::CliOptions;
use memegen::client::HttpGenerationService;
use memegen::config::setup_logging;
use memegen::controller::{GenerationTrigger, UiState};
use memegen::display::ConsoleSurface;
use memegen::export::{FileDownloader, ImageExporter};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliOptions::parse();

    if setup_logging(cli.debug).is_err() {
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(UiState::Success) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            error!("Application error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: CliOptions) -> Result<UiState> {
    let service = HttpGenerationService::new(&cli.service_url)
        .with_context(|| format!("Bad service url {}", cli.service_url))?;
    let surface = Arc::new(ConsoleSurface::new(
        &cli.topic,
        &cli.top_text,
        &cli.bottom_text,
    ));

    let trigger = GenerationTrigger::new(service, surface.clone());
    let outcome = trigger.trigger().await;
    if outcome == UiState::Success {
        println!("{}", surface.caption());
    }

    if cli.download {
        fs::create_dir_all(&cli.out_dir)
            .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;
        let exporter = ImageExporter::new(surface, FileDownloader::new(&cli.out_dir));
        // the downloader may block on an HTTP fetch
        tokio::task::block_in_place(|| exporter.export());
    }

    Ok(outcome)
}
