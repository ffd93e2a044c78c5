use async_trait::async_trait;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::core::interfaces::adapters::ImageHostingService;
use crate::core::models::{ImageBlob, MultipartBody, UploadError, UploadTarget};
use crate::global_constants;

/// Uploads to a Chevereto-style `/api/1/upload` endpoint using a single `source` file part.
pub struct HttpImageHostingService {
    client: reqwest::Client,
    target: UploadTarget,
}

impl HttpImageHostingService {
    pub fn new(target: UploadTarget) -> Self {
        Self::with_client(reqwest::Client::new(), target)
    }

    pub fn with_client(client: reqwest::Client, target: UploadTarget) -> Self {
        Self { client, target }
    }

    async fn post_multipart(&self, body: MultipartBody) -> Result<reqwest::Response, UploadError> {
        log::info!(
            "[UPLOAD] Uploading {} bytes to {}",
            body.len(),
            self.target.endpoint_url
        );
        log::debug!("[UPLOAD] multipart boundary: {}", body.boundary());

        let content_type = body.content_type();
        let content_length = body.len();

        let response = self
            .client
            .post(&self.target.endpoint_url)
            .header(CONTENT_TYPE, content_type)
            .header(CONTENT_LENGTH, content_length)
            .header(global_constants::API_KEY_HEADER, &self.target.api_key)
            .body(body.into_bytes())
            .send()
            .await?;

        Ok(response)
    }
}

/// Extracts `image.url` from a response body, requiring `status_code` to be 200.
pub fn parse_upload_response(response_text: &str) -> Result<String, UploadError> {
    let parse_failure = |reason: String| UploadError::ResponseParse {
        reason,
        body: response_text.to_string(),
    };

    let json: serde_json::Value = serde_json::from_str(response_text)
        .map_err(|error| parse_failure(format!("invalid JSON: {}", error)))?;

    let status_code = json["status_code"].as_u64();
    if status_code != Some(u64::from(global_constants::SUCCESS_STATUS_CODE)) {
        return Err(parse_failure(match status_code {
            Some(code) => format!("status_code was {}", code),
            None => "status_code missing".to_string(),
        }));
    }

    json["image"]["url"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| parse_failure("image.url missing".to_string()))
}

#[async_trait]
impl ImageHostingService for HttpImageHostingService {
    async fn upload_image(&self, blob: &ImageBlob) -> Result<String, UploadError> {
        let body = MultipartBody::build_for(blob);
        let response = self.post_multipart(body).await?;
        let status = response.status();

        if status != StatusCode::OK {
            log::error!("[UPLOAD] Upload rejected with status {}", status);
            match response.text().await {
                Ok(response_text) => log::debug!("[UPLOAD] rejection body: {}", response_text),
                Err(error) => log::debug!("[UPLOAD] could not read rejection body: {}", error),
            }
            return Err(UploadError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let response_text = response.text().await?;
        log::debug!("[UPLOAD] response {}: {}", status, response_text);

        let image_url = parse_upload_response(&response_text)?;

        log::info!("[UPLOAD] Image uploaded successfully: {}", image_url);
        Ok(image_url)
    }
}
