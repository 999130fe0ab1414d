use crate::core::filters::select_matches;
use crate::models::{NewStyle, Style, StyleCategory, UnknownVariant};
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use validator::Validate;

/// Errors that can occur when reading or replacing the style catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid style '{name}': {source}")]
    InvalidStyle {
        name: String,
        source: validator::ValidationErrors,
    },

    #[error("Corrupt style record: {0}")]
    CorruptRecord(#[from] UnknownVariant),
}

/// Read access to the style catalog plus the bulk replace used by seeding
#[async_trait]
pub trait StyleCatalog: Send + Sync {
    /// Up to `limit` styles of `category` whose tags contain `face_shape`,
    /// in storage order. No match yields an empty list.
    async fn find_matching(
        &self,
        category: StyleCategory,
        face_shape: &str,
        limit: usize,
    ) -> Result<Vec<Style>, CatalogError>;

    /// Every style in storage order
    async fn all(&self) -> Result<Vec<Style>, CatalogError>;

    /// Drop every stored style, then insert `styles`
    async fn replace_all(&self, styles: Vec<NewStyle>) -> Result<Vec<Style>, CatalogError>;

    async fn health_check(&self) -> Result<bool, CatalogError>;
}

/// Validate a batch before any of it is written
pub fn validate_styles(styles: &[NewStyle]) -> Result<(), CatalogError> {
    for style in styles {
        style.validate().map_err(|source| CatalogError::InvalidStyle {
            name: style.name.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Catalog held in process memory
#[derive(Default)]
pub struct InMemoryCatalog {
    styles: RwLock<Vec<Style>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog already holding `styles`
    pub fn with_styles(styles: Vec<NewStyle>) -> Result<Self, CatalogError> {
        validate_styles(&styles)?;
        let styles = styles.into_iter().map(NewStyle::into_style).collect();
        Ok(Self {
            styles: RwLock::new(styles),
        })
    }
}

#[async_trait]
impl StyleCatalog for InMemoryCatalog {
    async fn find_matching(
        &self,
        category: StyleCategory,
        face_shape: &str,
        limit: usize,
    ) -> Result<Vec<Style>, CatalogError> {
        let styles = self.styles.read().await;
        Ok(select_matches(styles.iter(), category, face_shape, limit))
    }

    async fn all(&self) -> Result<Vec<Style>, CatalogError> {
        Ok(self.styles.read().await.clone())
    }

    async fn replace_all(&self, styles: Vec<NewStyle>) -> Result<Vec<Style>, CatalogError> {
        validate_styles(&styles)?;
        let inserted: Vec<Style> = styles.into_iter().map(NewStyle::into_style).collect();

        let mut stored = self.styles.write().await;
        *stored = inserted.clone();

        tracing::info!("Replaced in-memory catalog with {} styles", inserted.len());
        Ok(inserted)
    }

    async fn health_check(&self) -> Result<bool, CatalogError> {
        Ok(true)
    }
}
