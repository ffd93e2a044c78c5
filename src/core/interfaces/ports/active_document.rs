use crate::core::models::PasteError;

/// The document currently being edited, with a cursor that text is inserted at.
pub trait ActiveDocument: Send + Sync {
    /// Inserts `text` literally at the cursor. Fails with
    /// `PasteError::InsertionTargetMissing` when there is nothing editable to insert into.
    fn insert_at_cursor(&self, text: &str) -> Result<(), PasteError>;
}
