use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upload endpoint answered with HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("unexpected upload response ({reason}): {body}")]
    ResponseParse { reason: String, body: String },

    #[error("upload did not complete within {seconds} seconds")]
    Timeout { seconds: u64 },
}

#[derive(Debug, Error)]
pub enum PasteError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("no active editable document to insert into")]
    InsertionTargetMissing,

    #[error("failed to insert into document: {0}")]
    Insertion(String),
}
