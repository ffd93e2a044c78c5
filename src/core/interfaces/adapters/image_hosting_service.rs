use async_trait::async_trait;

use crate::core::models::{ImageBlob, UploadError};

#[async_trait]
pub trait ImageHostingService: Send + Sync {
    /// Sends one upload request for `blob` and returns the hosted URL.
    async fn upload_image(&self, blob: &ImageBlob) -> Result<String, UploadError>;
}
