// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FaceShape, StyleCategory, Difficulty, Maintenance, Style, NewStyle, UnknownVariant};
pub use requests::{ImageUpload, UploadError, DEFAULT_MAX_UPLOAD_BYTES};
pub use responses::{RecommendationResponse, Recommendations, HealthResponse, ErrorResponse, SessionResponse, SessionUser};
