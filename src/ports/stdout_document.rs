use crate::core::interfaces::ports::ActiveDocument;
use crate::core::models::PasteError;

/// Writes each insertion to standard output on its own line.
pub struct StdoutDocument;

impl ActiveDocument for StdoutDocument {
    fn insert_at_cursor(&self, text: &str) -> Result<(), PasteError> {
        println!("{}", text);
        Ok(())
    }
}
