pub const APPLICATION_NAME: &str = "paste-image-uploader";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_DOCUMENT: &str = "[DOCUMENT]";
pub const LOG_TAG_NOTIFY: &str = "[NOTIFY]";

pub const DEFAULT_UPLOAD_ENDPOINT_URL: &str = "https://xxxxx/api/1/upload";
pub const DEFAULT_API_KEY: &str = "your-api-key";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

pub const API_KEY_HEADER: &str = "X-API-Key";
pub const MULTIPART_FIELD_NAME: &str = "source";
pub const MULTIPART_BOUNDARY: &str = "----WebKitFormBoundary7MA4YWxkTrZu0gW";

pub const SUCCESS_STATUS_CODE: u16 = 200;

pub const CLIPBOARD_IMAGE_FILE_NAME: &str = "image.png";
pub const CLIPBOARD_IMAGE_MIME_TYPE: &str = "image/png";
pub const CLIPBOARD_TEXT_MIME_TYPE: &str = "text/plain";
pub const IMAGE_MIME_PREFIX: &str = "image";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const USER_MESSAGE_UPLOAD_FAILED: &str = "Image upload failed";
pub const USER_MESSAGE_INSERT_FAILED: &str = "Could not insert image link";
