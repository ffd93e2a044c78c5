use crate::core::models::ImageBlob;
use crate::global_constants;

/// A fully assembled multipart/form-data payload holding a single file part.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Builds the body with the fixed boundary, unless the image bytes happen to
    /// contain it, in which case a random one is used for this request.
    pub fn build_for(blob: &ImageBlob) -> Self {
        let boundary = if contains_sequence(&blob.bytes, global_constants::MULTIPART_BOUNDARY.as_bytes()) {
            let random_boundary = format!("----PasteImageBoundary{}", uuid::Uuid::new_v4().simple());
            log::warn!(
                "[MULTIPART] payload contains the fixed boundary, using {}",
                random_boundary
            );
            random_boundary
        } else {
            global_constants::MULTIPART_BOUNDARY.to_string()
        };

        Self::build_with_boundary(blob, boundary)
    }

    pub fn build_with_boundary(blob: &ImageBlob, boundary: String) -> Self {
        let part_header = part_header(&boundary, &blob.filename, &blob.mime_type);
        let closing = closing_delimiter(&boundary);

        let mut bytes = Vec::with_capacity(part_header.len() + blob.bytes.len() + closing.len());
        bytes.extend_from_slice(part_header.as_bytes());
        bytes.extend_from_slice(&blob.bytes);
        bytes.extend_from_slice(closing.as_bytes());

        Self { boundary, bytes }
    }

    /// Bytes added around the payload for a given boundary, filename and mime type.
    #[cfg(test)]
    pub fn framing_overhead(boundary: &str, filename: &str, mime_type: &str) -> usize {
        part_header(boundary, filename, mime_type).len() + closing_delimiter(boundary).len()
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

fn part_header(boundary: &str, filename: &str, mime_type: &str) -> String {
    format!(
        "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
        boundary,
        global_constants::MULTIPART_FIELD_NAME,
        sanitize_header_value(filename).replace('"', "%22"),
        sanitize_header_value(mime_type)
    )
}

fn closing_delimiter(boundary: &str) -> String {
    format!("\r\n--{}--\r\n", boundary)
}

fn sanitize_header_value(value: &str) -> String {
    value.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

fn contains_sequence(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}
