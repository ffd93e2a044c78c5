use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::interfaces::ports::ClipboardReader;
use crate::core::models::ClipboardItem;
use crate::global_constants::{CLIPBOARD_TEXT_MIME_TYPE, LOG_TAG_CLIPBOARD};

const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Treats a list of files as if they had been pasted together.
pub struct FileClipboardReader {
    paths: Vec<PathBuf>,
}

impl FileClipboardReader {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    fn read_file_item(&self, path: &Path) -> Result<ClipboardItem> {
        let bytes = std::fs::read(path).with_context(|| format!("failed to read {:?}", path))?;
        let mime_type = guess_mime_type(path);
        let name = path
            .file_name()
            .map(|file_name| file_name.to_string_lossy().into_owned());

        log::debug!(
            "{} {:?} read as {} ({} bytes)",
            LOG_TAG_CLIPBOARD,
            path,
            mime_type,
            bytes.len()
        );

        Ok(ClipboardItem::new(mime_type, name, bytes))
    }
}

fn guess_mime_type(path: &Path) -> String {
    if let Ok(format) = ::image::ImageFormat::from_path(path) {
        return format.to_mime_type().to_string();
    }

    let is_text = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| matches!(extension.to_ascii_lowercase().as_str(), "txt" | "md"))
        .unwrap_or(false);

    if is_text {
        CLIPBOARD_TEXT_MIME_TYPE.to_string()
    } else {
        UNKNOWN_MIME_TYPE.to_string()
    }
}

impl ClipboardReader for FileClipboardReader {
    fn read_clipboard_items(&self) -> Result<Vec<ClipboardItem>> {
        self.paths
            .iter()
            .map(|path| self.read_file_item(path))
            .collect()
    }
}
