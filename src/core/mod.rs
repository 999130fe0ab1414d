// Core recommendation exports
pub mod filters;
pub mod recommender;

pub use filters::{matches_style, select_matches, MAX_RESULTS_PER_CATEGORY};
pub use recommender::{AnalysisError, AnalysisStage, Recommender};
