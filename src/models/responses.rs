use serde::{Deserialize, Serialize};
use crate::models::domain::Style;

/// Response for the analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub face_shape: String,
    pub recommendations: Recommendations,
}

/// Matching styles, one list per catalog category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub hairstyles: Vec<Style>,
    #[serde(rename = "beardStyles")]
    pub beard_styles: Vec<Style>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Current session principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
