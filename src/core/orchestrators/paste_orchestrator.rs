use std::sync::Arc;
use std::time::Duration;

use crate::core::interfaces::adapters::ImageHostingService;
use crate::core::interfaces::ports::{ActiveDocument, Notifier};
use crate::core::models::{
    ClipboardItem, ImageBlob, PasteEffect, PasteError, PasteReport, UploadError,
};
use crate::global_constants;

pub struct PasteOrchestrator {
    image_hosting_service: Arc<dyn ImageHostingService>,
    request_timeout: Duration,
    paste_lock: tokio::sync::Mutex<()>,
}

#[derive(Debug)]
pub struct PasteOutcome {
    pub report: PasteReport,
    pub insertion_errors: Vec<PasteError>,
}

impl PasteOutcome {
    pub fn has_failures(&self) -> bool {
        self.report.failed_upload_count > 0 || !self.insertion_errors.is_empty()
    }
}

impl PasteOrchestrator {
    pub fn build(
        image_hosting_service: Arc<dyn ImageHostingService>,
        request_timeout: Duration,
    ) -> Self {
        log::debug!(
            "[PASTE] building orchestrator, upload timeout={:?}",
            request_timeout
        );

        Self {
            image_hosting_service,
            request_timeout,
            paste_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Handles one paste event end to end. Each blob's effect is applied as soon as
    /// its upload finishes, so links for completed uploads survive a cancelled paste.
    /// Paste events on the same orchestrator are serialised so their insertions never
    /// interleave.
    pub async fn on_paste(
        &self,
        clipboard_items: Vec<ClipboardItem>,
        document: Option<&dyn ActiveDocument>,
        notifier: &dyn Notifier,
    ) -> PasteOutcome {
        let _paste_guard = self.paste_lock.lock().await;

        let mut report = PasteReport::default();
        let mut insertion_errors = Vec::new();

        for blob in Self::collect_image_blobs(clipboard_items) {
            report.default_prevented = true;

            let effect = self.upload_blob(&blob, &mut report).await;
            if let Some(error) = Self::apply_effect(&effect, document, notifier) {
                insertion_errors.push(error);
            }
            report.effects.push(effect);
        }

        PasteOutcome {
            report,
            insertion_errors,
        }
    }

    /// Uploads every image item in order and describes the resulting UI changes.
    pub async fn handle_paste(&self, clipboard_items: Vec<ClipboardItem>) -> PasteReport {
        let mut report = PasteReport::default();

        for blob in Self::collect_image_blobs(clipboard_items) {
            report.default_prevented = true;

            let effect = self.upload_blob(&blob, &mut report).await;
            report.effects.push(effect);
        }

        report
    }

    /// Performs the effects of a report. Returns the insertions that could not be made.
    pub fn apply_effects(
        report: &PasteReport,
        document: Option<&dyn ActiveDocument>,
        notifier: &dyn Notifier,
    ) -> Vec<PasteError> {
        report
            .effects
            .iter()
            .filter_map(|effect| Self::apply_effect(effect, document, notifier))
            .collect()
    }

    fn collect_image_blobs(clipboard_items: Vec<ClipboardItem>) -> Vec<ImageBlob> {
        let image_blobs: Vec<ImageBlob> = clipboard_items
            .into_iter()
            .filter(ClipboardItem::is_image)
            .map(ClipboardItem::into_image_blob)
            .collect();

        if image_blobs.is_empty() {
            log::debug!("[PASTE] no image items in paste, leaving default behaviour");
        } else {
            log::info!("[PASTE] uploading {} pasted image(s)", image_blobs.len());
        }

        image_blobs
    }

    async fn upload_blob(&self, blob: &ImageBlob, report: &mut PasteReport) -> PasteEffect {
        report.upload_count += 1;

        match self.upload_with_deadline(blob).await {
            Ok(image_url) => {
                log::info!("[PASTE] uploaded {} to {}", blob.filename, image_url);
                PasteEffect::insert_image_link(&image_url)
            }
            Err(error) => {
                log::error!("[PASTE] upload of {} failed: {}", blob.filename, error);
                report.failed_upload_count += 1;
                PasteEffect::Notify(format!(
                    "{}: {}",
                    global_constants::USER_MESSAGE_UPLOAD_FAILED,
                    error
                ))
            }
        }
    }

    fn apply_effect(
        effect: &PasteEffect,
        document: Option<&dyn ActiveDocument>,
        notifier: &dyn Notifier,
    ) -> Option<PasteError> {
        match effect {
            PasteEffect::InsertText(text) => {
                let result = match document {
                    Some(document) => document.insert_at_cursor(text),
                    None => Err(PasteError::InsertionTargetMissing),
                };

                let error = result.err()?;
                log::error!("[PASTE] could not insert {}: {}", text, error);
                notifier.notify(&format!(
                    "{}: {}",
                    global_constants::USER_MESSAGE_INSERT_FAILED,
                    error
                ));
                Some(error)
            }
            PasteEffect::Notify(message) => {
                notifier.notify(message);
                None
            }
        }
    }

    async fn upload_with_deadline(&self, blob: &ImageBlob) -> Result<String, UploadError> {
        let upload_future = self.image_hosting_service.upload_image(blob);

        match tokio::time::timeout(self.request_timeout, upload_future).await {
            Ok(result) => result,
            Err(_) => {
                log::error!(
                    "[PASTE] upload timed out after {} seconds",
                    self.request_timeout.as_secs()
                );
                Err(UploadError::Timeout {
                    seconds: self.request_timeout.as_secs(),
                })
            }
        }
    }
}
