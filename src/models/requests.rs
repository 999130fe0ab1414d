use thiserror::Error;

/// Upload limit applied when nothing else is configured (5 MB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Reasons an uploaded file is refused at ingestion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please upload an image")]
    Missing,

    #[error("Only image files are allowed!")]
    NotAnImage(String),

    #[error("Uploaded image is empty")]
    Empty,

    #[error("File size must not exceed {limit} bytes")]
    TooLarge { limit: usize },
}

/// Validated image payload handed to the recommender
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl ImageUpload {
    pub fn new(
        bytes: Vec<u8>,
        mime_type: impl Into<String>,
        file_name: Option<String>,
        max_bytes: usize,
    ) -> Result<Self, UploadError> {
        let mime_type = mime_type.into();
        check_media_type(&mime_type)?;

        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(UploadError::TooLarge { limit: max_bytes });
        }

        Ok(Self {
            bytes,
            mime_type,
            file_name,
        })
    }
}

/// Accept only `image/*` media types
pub fn check_media_type(mime_type: &str) -> Result<(), UploadError> {
    let top_level = mime_type.split('/').next().unwrap_or_default();
    if top_level.trim().eq_ignore_ascii_case("image") && mime_type.contains('/') {
        Ok(())
    } else {
        Err(UploadError::NotAnImage(mime_type.to_string()))
    }
}
