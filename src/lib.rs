//! Glam Advisor - grooming style recommendations by face shape
//!
//! Uploaded photos are classified by an external face analysis service;
//! the detected face shape then selects hairstyles and beard styles from
//! a small catalog.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{AnalysisError, Recommender, MAX_RESULTS_PER_CATEGORY};
pub use models::{FaceShape, Style, StyleCategory, NewStyle, ImageUpload, RecommendationResponse};
pub use services::{FaceShapeClassifier, HttpClassifier, StyleCatalog, InMemoryCatalog, PostgresCatalog, TokenVerifier};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        assert_eq!(FaceShape::ALL.len(), 6);
        assert_eq!(MAX_RESULTS_PER_CATEGORY, 6);
        assert_eq!(StyleCategory::BeardStyle.as_str(), "beard-style");
    }
}
