use anyhow::Result;
use std::io::Cursor;

use crate::global_constants;

#[derive(Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl std::fmt::Debug for ImageBlob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBlob")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("byte_count", &self.bytes.len())
            .finish()
    }
}

impl ImageBlob {
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Encodes raw RGBA pixels, as handed out by the system clipboard, into a PNG blob.
    pub fn encode_png_from_rgba(width: u32, height: u32, raw_rgba_data: Vec<u8>) -> Result<Self> {
        log::debug!(
            "[IMAGE_BLOB] encoding {}x{} clipboard image as png",
            width,
            height
        );

        let rgba_image = ::image::RgbaImage::from_raw(width, height, raw_rgba_data)
            .ok_or_else(|| anyhow::anyhow!("Failed to create image from raw data"))?;

        let mut png_bytes = Vec::new();
        ::image::DynamicImage::ImageRgba8(rgba_image)
            .write_to(&mut Cursor::new(&mut png_bytes), ::image::ImageFormat::Png)?;

        Ok(Self::new(
            png_bytes,
            global_constants::CLIPBOARD_IMAGE_FILE_NAME,
            global_constants::CLIPBOARD_IMAGE_MIME_TYPE,
        ))
    }
}
