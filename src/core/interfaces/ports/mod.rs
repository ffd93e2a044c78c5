mod active_document;
mod clipboard_reader;
mod notifier;

pub use active_document::ActiveDocument;
pub use clipboard_reader::ClipboardReader;
pub use notifier::Notifier;
