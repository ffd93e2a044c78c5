use anyhow::{Context, Result};

use crate::core::interfaces::ports::ClipboardReader;
use crate::core::models::{ClipboardItem, ImageBlob};
use crate::global_constants::LOG_TAG_CLIPBOARD;

/// Snapshots the system clipboard: an image representation (as PNG) and/or plain text.
pub struct ArboardClipboardReader;

impl ArboardClipboardReader {
    pub fn initialize() -> Self {
        log::debug!("{} initializing system clipboard reader", LOG_TAG_CLIPBOARD);
        Self
    }

    fn read_image_item(&self, clipboard: &mut arboard::Clipboard) -> Result<Option<ClipboardItem>> {
        let image_data = match clipboard.get_image() {
            Ok(image_data) => image_data,
            Err(arboard::Error::ContentNotAvailable) => return Ok(None),
            Err(error) => return Err(error).context("failed to read image from clipboard"),
        };

        log::info!(
            "{} found {}x{} image on clipboard",
            LOG_TAG_CLIPBOARD,
            image_data.width,
            image_data.height
        );

        let blob = ImageBlob::encode_png_from_rgba(
            image_data.width as u32,
            image_data.height as u32,
            image_data.bytes.into_owned(),
        )?;

        Ok(Some(ClipboardItem::new(
            blob.mime_type,
            Some(blob.filename),
            blob.bytes,
        )))
    }

    fn read_text_item(&self, clipboard: &mut arboard::Clipboard) -> Option<ClipboardItem> {
        match clipboard.get_text() {
            Ok(text) if !text.is_empty() => Some(ClipboardItem::text(&text)),
            Ok(_) => None,
            Err(error) => {
                log::debug!("{} no text on clipboard: {}", LOG_TAG_CLIPBOARD, error);
                None
            }
        }
    }
}

impl ClipboardReader for ArboardClipboardReader {
    fn read_clipboard_items(&self) -> Result<Vec<ClipboardItem>> {
        let mut clipboard =
            arboard::Clipboard::new().context("failed to initialize clipboard")?;

        let mut items = Vec::new();
        if let Some(image_item) = self.read_image_item(&mut clipboard)? {
            items.push(image_item);
        }
        if let Some(text_item) = self.read_text_item(&mut clipboard) {
            items.push(text_item);
        }

        log::debug!("{} read {} clipboard item(s)", LOG_TAG_CLIPBOARD, items.len());
        Ok(items)
    }
}
