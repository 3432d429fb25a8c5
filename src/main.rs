#![windows_subsystem = "windows"]
//! Link Hub - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod links;
mod preference;
mod profile;
mod storage;
mod theme;
mod types;
mod ui;
mod utils;

use anyhow::{anyhow, Context, Result};
use app::App;
use constants::*;
use eframe::egui;
use links::{LinkDirectory, TitleCollator};
use storage::LocalStorage;
use tracing::{error, info};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "linkhub.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,linkhub=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Link Hub starting");

    if let Err(e) = run(&data_dir) {
        error!(error = %format!("{e:#}"), "Link Hub failed");
        return Err(e);
    }

    info!("Link Hub closed");
    Ok(())
}

fn run(data_dir: &std::path::Path) -> Result<()> {
    let storage = LocalStorage::open(data_dir.join(STORAGE_FILE));
    info!(path = %storage.path().display(), "Local storage opened");

    let collator =
        TitleCollator::new(COLLATION_LOCALE).context("Failed to set up title ordering")?;
    let links = LinkDirectory::new(profile::personal_links(), &collator);
    info!(count = links.entries().len(), "Links loaded");

    let (rgba, width, height) = utils::rasterize_icon(256).context("Failed to build window icon")?;
    let icon = egui::IconData {
        rgba,
        width,
        height,
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(WINDOW_MIN_SIZE)
        .with_title(APP_NAME)
        .with_icon(std::sync::Arc::new(icon));

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    let profile = profile::profile();
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, profile, links, storage)))),
    )
    .map_err(|e| anyhow!("{e}"))
    .context("Window closed with an error")
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
