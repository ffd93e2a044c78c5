use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::interfaces::ports::ActiveDocument;
use crate::core::models::PasteError;
use crate::global_constants::LOG_TAG_DOCUMENT;

/// A Markdown file on disk edited at a byte-offset cursor.
///
/// The cursor starts at the requested offset (or the end of the file) and moves
/// past each inserted string, so consecutive insertions keep paste order.
pub struct MarkdownFileDocument {
    path: PathBuf,
    cursor: Mutex<Option<usize>>,
}

impl MarkdownFileDocument {
    pub fn open(path: PathBuf, cursor: Option<usize>) -> Self {
        log::debug!(
            "{} editing {:?} at cursor {:?}",
            LOG_TAG_DOCUMENT,
            path,
            cursor
        );

        Self {
            path,
            cursor: Mutex::new(cursor),
        }
    }

    /// Writes a sibling temp file and renames it over the document, so a failed
    /// write never leaves the document truncated.
    fn replace_contents(&self, contents: &str) -> std::io::Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.as_file().sync_all()?;

        if let Ok(metadata) = std::fs::metadata(&self.path) {
            temp_file.as_file().set_permissions(metadata.permissions())?;
        }

        temp_file.persist(&self.path).map_err(|error| error.error)?;
        Ok(())
    }
}

fn snap_to_char_boundary(contents: &str, requested: usize) -> usize {
    let mut position = requested.min(contents.len());
    while !contents.is_char_boundary(position) {
        position -= 1;
    }
    position
}

impl ActiveDocument for MarkdownFileDocument {
    fn insert_at_cursor(&self, text: &str) -> Result<(), PasteError> {
        if !self.path.is_file() {
            log::warn!("{} {:?} is not an editable file", LOG_TAG_DOCUMENT, self.path);
            return Err(PasteError::InsertionTargetMissing);
        }

        let mut cursor = self
            .cursor
            .lock()
            .map_err(|_| PasteError::Insertion("document cursor poisoned".to_string()))?;

        let mut contents = std::fs::read_to_string(&self.path)
            .map_err(|error| PasteError::Insertion(error.to_string()))?;

        let position = snap_to_char_boundary(&contents, cursor.unwrap_or(contents.len()));
        contents.insert_str(position, text);

        self.replace_contents(&contents)
            .map_err(|error| PasteError::Insertion(error.to_string()))?;

        *cursor = Some(position + text.len());

        log::info!(
            "{} inserted {} bytes into {:?} at {}",
            LOG_TAG_DOCUMENT,
            text.len(),
            self.path,
            position
        );
        Ok(())
    }
}
