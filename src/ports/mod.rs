mod arboard_clipboard_reader;
mod file_clipboard_reader;
mod log_notifier;
mod markdown_file_document;
mod stdout_document;

pub use arboard_clipboard_reader::ArboardClipboardReader;
pub use file_clipboard_reader::FileClipboardReader;
pub use log_notifier::LogNotifier;
pub use markdown_file_document::MarkdownFileDocument;
pub use stdout_document::StdoutDocument;
