use crate::models::{FaceShape, ImageUpload, RecommendationResponse, Recommendations, StyleCategory, UploadError};
use crate::core::filters::MAX_RESULTS_PER_CATEGORY;
use crate::services::{CatalogError, ClassifierError, FaceShapeClassifier, StyleCatalog};
use std::sync::Arc;
use thiserror::Error;

/// Failure taxonomy of an analysis request
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Missing or unacceptable upload
    #[error("{0}")]
    Validation(String),

    /// Face analysis backend could not be reached in time
    #[error("AI service is currently unavailable. Please try again later.")]
    ServiceUnavailable,

    /// Backend answered but produced no usable face shape
    #[error("{0}")]
    Classification(String),

    /// Anything else; the detail is for logs only
    #[error("Error analyzing image")]
    Internal(String),
}

impl AnalysisError {
    pub fn http_status(&self) -> u16 {
        match self {
            AnalysisError::Validation(_) => 400,
            AnalysisError::ServiceUnavailable => 503,
            AnalysisError::Classification(_) => 400,
            AnalysisError::Internal(_) => 500,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation(_) => "validation_error",
            AnalysisError::ServiceUnavailable => "service_unavailable",
            AnalysisError::Classification(_) => "classification_error",
            AnalysisError::Internal(_) => "internal_error",
        }
    }
}

impl From<UploadError> for AnalysisError {
    fn from(err: UploadError) -> Self {
        AnalysisError::Validation(err.to_string())
    }
}

impl From<ClassifierError> for AnalysisError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::Unavailable(detail) => {
                tracing::warn!("Face analysis service unavailable: {}", detail);
                AnalysisError::ServiceUnavailable
            }
            ClassifierError::Rejected(message) => AnalysisError::Classification(message),
            err @ ClassifierError::NoFaceShape => AnalysisError::Classification(err.to_string()),
            other => AnalysisError::Internal(other.to_string()),
        }
    }
}

impl From<CatalogError> for AnalysisError {
    fn from(err: CatalogError) -> Self {
        AnalysisError::Internal(err.to_string())
    }
}

/// Position of a request in the analysis flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Received,
    Classifying,
    Classified,
    Matching,
    Assembled,
    Failed,
}

/// Recommendation orchestrator
///
/// # Flow
/// 1. Send the image to the face-shape classifier
/// 2. Query the catalog for hairstyles and beard styles suiting the shape
/// 3. Assemble both lists into one response
///
/// Classifier failures end the flow before the catalog is touched. Empty
/// catalog results are valid output.
#[derive(Clone)]
pub struct Recommender {
    classifier: Arc<dyn FaceShapeClassifier>,
    catalog: Arc<dyn StyleCatalog>,
    max_results: usize,
}

impl Recommender {
    pub fn new(classifier: Arc<dyn FaceShapeClassifier>, catalog: Arc<dyn StyleCatalog>) -> Self {
        Self {
            classifier,
            catalog,
            max_results: MAX_RESULTS_PER_CATEGORY,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn catalog(&self) -> &Arc<dyn StyleCatalog> {
        &self.catalog
    }

    /// Classify the uploaded image and collect matching styles
    pub async fn recommend(&self, upload: &ImageUpload) -> Result<RecommendationResponse, AnalysisError> {
        let mut stage = AnalysisStage::Received;
        let result = self.run(upload, &mut stage).await;

        if let Err(err) = &result {
            match err {
                AnalysisError::Internal(detail) => {
                    tracing::error!(failed_at = ?stage, "Analysis failed: {}", detail)
                }
                other => {
                    tracing::warn!(failed_at = ?stage, kind = other.kind(), "Analysis failed: {}", other)
                }
            }
            advance(&mut stage, AnalysisStage::Failed);
        }

        result
    }

    async fn run(
        &self,
        upload: &ImageUpload,
        stage: &mut AnalysisStage,
    ) -> Result<RecommendationResponse, AnalysisError> {
        advance(stage, AnalysisStage::Classifying);
        let face_shape = self
            .classifier
            .classify(&upload.bytes, &upload.mime_type)
            .await?;

        if face_shape.trim().is_empty() {
            return Err(ClassifierError::NoFaceShape.into());
        }
        advance(stage, AnalysisStage::Classified);

        if FaceShape::from_tag(&face_shape).is_none() {
            tracing::warn!("Classifier returned unrecognized face shape {:?}", face_shape);
        }

        advance(stage, AnalysisStage::Matching);
        let (hairstyles, beard_styles) = tokio::try_join!(
            self.catalog
                .find_matching(StyleCategory::Hairstyle, &face_shape, self.max_results),
            self.catalog
                .find_matching(StyleCategory::BeardStyle, &face_shape, self.max_results),
        )?;

        advance(stage, AnalysisStage::Assembled);
        tracing::info!(
            "Face shape {}: {} hairstyles, {} beard styles",
            face_shape,
            hairstyles.len(),
            beard_styles.len()
        );

        Ok(RecommendationResponse {
            face_shape,
            recommendations: Recommendations {
                hairstyles,
                beard_styles,
            },
        })
    }
}

fn advance(stage: &mut AnalysisStage, next: AnalysisStage) {
    tracing::debug!(from = ?*stage, to = ?next, "analysis stage");
    *stage = next;
}
