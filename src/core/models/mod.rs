mod clipboard_item;
mod errors;
mod image_blob;
mod multipart_body;
mod paste_effect;
mod upload_target;
mod user_settings;

pub use clipboard_item::ClipboardItem;
pub use errors::{PasteError, UploadError};
pub use image_blob::ImageBlob;
pub use multipart_body::MultipartBody;
pub use paste_effect::{PasteEffect, PasteReport};
pub use upload_target::UploadTarget;
pub use user_settings::UserSettings;
