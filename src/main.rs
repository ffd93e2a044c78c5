mod adapters;
mod cli;
mod core;
mod global_constants;
mod ports;

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use crate::adapters::HttpImageHostingService;
use crate::cli::Cli;
use crate::core::interfaces::ports::{ActiveDocument, ClipboardReader};
use crate::core::models::{UploadTarget, UserSettings};
use crate::core::orchestrators::PasteOrchestrator;
use crate::global_constants::LOG_TAG_MAIN;
use crate::ports::{
    ArboardClipboardReader, FileClipboardReader, LogNotifier, MarkdownFileDocument,
    StdoutDocument,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    log::info!("{} Starting {}", LOG_TAG_MAIN, global_constants::APPLICATION_NAME);

    match run(Cli::parse()).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            log::error!("{} {:#}", LOG_TAG_MAIN, error);
            eprintln!("{} error: {:#}", global_constants::APPLICATION_NAME, error);
            std::process::exit(2);
        }
    }
}

/// Runs one paste. Returns whether every image was uploaded and inserted.
async fn run(cli: Cli) -> Result<bool> {
    let settings = cli.apply_overrides(UserSettings::load()?);
    if settings.uses_placeholder_api_key() {
        log::warn!(
            "{} API key is still the placeholder, uploads will likely be rejected",
            LOG_TAG_MAIN
        );
    }

    let image_hosting_service = Arc::new(HttpImageHostingService::new(
        UploadTarget::from_settings(&settings),
    ));
    let orchestrator = PasteOrchestrator::build(image_hosting_service, settings.request_timeout());

    let clipboard_reader: Box<dyn ClipboardReader> = if cli.files.is_empty() {
        Box::new(ArboardClipboardReader::initialize())
    } else {
        Box::new(FileClipboardReader::new(cli.files.clone()))
    };
    let clipboard_items = clipboard_reader.read_clipboard_items()?;

    let document: Box<dyn ActiveDocument> = match &cli.document {
        Some(path) => Box::new(MarkdownFileDocument::open(path.clone(), cli.cursor)),
        None => Box::new(StdoutDocument),
    };

    let outcome = tokio::select! {
        outcome = orchestrator.on_paste(clipboard_items, Some(document.as_ref()), &LogNotifier) => outcome,
        _ = tokio::signal::ctrl_c() => {
            log::warn!("{} paste cancelled", LOG_TAG_MAIN);
            return Ok(false);
        }
    };

    if !outcome.report.default_prevented {
        log::info!("{} clipboard holds no image, nothing to upload", LOG_TAG_MAIN);
        eprintln!("No image found to paste");
        return Ok(false);
    }

    log::info!(
        "{} {} link(s) from {} upload(s), {} insertion failure(s)",
        LOG_TAG_MAIN,
        outcome.report.insertions().count(),
        outcome.report.upload_count,
        outcome.insertion_errors.len()
    );

    Ok(!outcome.has_failures())
}
