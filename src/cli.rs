use clap::Parser;
use std::path::PathBuf;

use crate::core::models::UserSettings;

/// Upload pasted images to an image host and insert Markdown links for them.
#[derive(Debug, Parser)]
#[command(name = "paste-image-uploader")]
#[command(about = "Upload clipboard images and insert Markdown image links", long_about = None)]
pub struct Cli {
    /// Markdown file to insert links into. Links go to stdout when omitted.
    #[arg(long, value_name = "FILE")]
    pub document: Option<PathBuf>,

    /// Byte offset of the cursor in the document. Defaults to the end of the file.
    #[arg(long, value_name = "OFFSET", requires = "document")]
    pub cursor: Option<usize>,

    /// Upload endpoint, overriding the settings file.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// API key sent in the X-API-Key header, overriding the settings file.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Seconds to wait for each upload before giving up.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Paste these files instead of reading the system clipboard.
    #[arg(value_name = "IMAGE_FILES")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn apply_overrides(&self, mut settings: UserSettings) -> UserSettings {
        if let Some(endpoint) = &self.endpoint {
            settings.upload_endpoint_url = endpoint.clone();
        }
        if let Some(api_key) = &self.api_key {
            settings.api_key = api_key.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.request_timeout_seconds = timeout;
        }
        settings
    }
}
