use anyhow::Result;

use crate::core::models::ClipboardItem;

pub trait ClipboardReader: Send + Sync {
    fn read_clipboard_items(&self) -> Result<Vec<ClipboardItem>>;
}
