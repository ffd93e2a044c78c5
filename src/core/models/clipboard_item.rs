use crate::core::models::ImageBlob;
use crate::global_constants;

/// One representation offered by a paste: a mime type plus its payload.
#[derive(Debug, Clone)]
pub struct ClipboardItem {
    pub mime_type: String,
    pub name: Option<String>,
    pub bytes: Vec<u8>,
}

impl ClipboardItem {
    pub fn new(mime_type: impl Into<String>, name: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            name,
            bytes,
        }
    }

    pub fn text(content: &str) -> Self {
        Self::new(
            global_constants::CLIPBOARD_TEXT_MIME_TYPE,
            None,
            content.as_bytes().to_vec(),
        )
    }

    pub fn is_image(&self) -> bool {
        self.mime_type
            .starts_with(global_constants::IMAGE_MIME_PREFIX)
    }

    pub fn into_image_blob(self) -> ImageBlob {
        let filename = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => default_file_name_for(&self.mime_type),
        };

        ImageBlob::new(self.bytes, filename, self.mime_type)
    }
}

fn default_file_name_for(mime_type: &str) -> String {
    let extension = mime_type
        .split('/')
        .nth(1)
        .and_then(|subtype| subtype.split(['+', ';']).next())
        .map(str::trim)
        .filter(|subtype| !subtype.is_empty())
        .unwrap_or("png");

    format!("image.{}", extension)
}
