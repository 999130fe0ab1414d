// Service exports
pub mod auth;
pub mod catalog;
pub mod classifier;
pub mod postgres;
pub mod seed;

pub use auth::{AuthError, Claims, TokenVerifier};
pub use catalog::{CatalogError, InMemoryCatalog, StyleCatalog};
pub use classifier::{ClassifierError, FaceShapeClassifier, HttpClassifier};
pub use postgres::PostgresCatalog;
