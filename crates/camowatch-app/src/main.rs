use std::sync::Arc;

use anyhow::Result;
use camowatch_config::Config;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod notify;
mod preview;
mod select;
mod state;

#[cfg(test)]
mod tests;

use crate::controller::AppController;
use crate::state::AppState;

#[derive(Parser)]
#[command(
    name = "camowatch",
    about = "Watch a screen region and announce keyword unlock lines once"
)]
struct Cli {
    /// List available monitors and exit
    #[arg(long)]
    list_monitors: bool,
    /// Monitor index to capture (skips the interactive prompt)
    #[arg(long)]
    monitor: Option<usize>,
    /// Capture region in absolute screen coordinates as X,Y,WxH
    #[arg(long)]
    region: Option<String>,
    /// Write a throttled preview snapshot while monitoring
    #[arg(long)]
    preview: bool,
    /// Keyword to watch for (default "camo")
    #[arg(long)]
    keyword: Option<String>,
    /// OCR language (default "eng")
    #[arg(long)]
    lang: Option<String>,
    /// Emit unlock events as JSON lines on stdout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if cli.list_monitors {
        for m in camowatch_ocr::list_monitors()? {
            println!(
                "{}: {} at ({}, {}) {}x{}",
                m.index, m.name, m.x, m.y, m.width, m.height
            );
        }
        return Ok(());
    }

    let mut config = Config::new();
    if let Some(keyword) = cli.keyword {
        config.detection.keyword = keyword;
    }
    if let Some(lang) = cli.lang {
        config.ocr.language = lang;
    }
    if cli.preview {
        config.preview.enabled = true;
    }

    config.ocr.capture_region = match &cli.region {
        Some(spec) => Some(select::parse_region(spec)?),
        None => select::choose_region(cli.monitor)?,
    };

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(cli.json).await;

    tracing::info!("monitoring; press Ctrl+C to stop");

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e:#}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    // Let the loop finish its in-flight poll and release the capture
    // handle before returning.
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task failed during shutdown: {e:#}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if atty::is(atty::Stream::Stdout) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    }
}
