use crate::core::models::UserSettings;

/// Where an upload goes and how it authenticates. Fixed for the lifetime of an uploader.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub endpoint_url: String,
    pub api_key: String,
}

impl std::fmt::Debug for UploadTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadTarget")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl UploadTarget {
    pub fn new(endpoint_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_settings(settings: &UserSettings) -> Self {
        Self::new(&settings.upload_endpoint_url, &settings.api_key)
    }
}
