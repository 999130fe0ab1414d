use crate::models::{FaceShape, NewStyle, Style, StyleCategory, UnknownVariant};
use crate::services::catalog::{validate_styles, CatalogError, StyleCatalog};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

const STYLE_COLUMNS: &str = r#"
    id, name, description, image_url, category, suited_face_shapes,
    difficulty, maintenance, created_at, updated_at
"#;

/// PostgreSQL-backed style catalog
///
/// Styles live in a single `styles` table. Face-shape suitability is a
/// `TEXT[]` column so matching is a containment test, and rows keep their
/// insertion sequence so results come back in seeding order.
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    /// Create a new catalog from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new catalog from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, CatalogError> {
        tracing::info!("Connecting to PostgreSQL style catalog");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

fn style_from_row(row: &PgRow) -> Result<Style, CatalogError> {
    let category: String = row.try_get("category")?;
    let shapes: Vec<String> = row.try_get("suited_face_shapes")?;
    let difficulty: String = row.try_get("difficulty")?;
    let maintenance: String = row.try_get("maintenance")?;

    Ok(Style {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        image_url: row.try_get("image_url")?,
        category: category.parse()?,
        suited_face_shapes: shapes
            .iter()
            .map(|shape| shape.parse::<FaceShape>())
            .collect::<Result<Vec<_>, UnknownVariant>>()?,
        difficulty: difficulty.parse()?,
        maintenance: maintenance.parse()?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl StyleCatalog for PostgresCatalog {
    async fn find_matching(
        &self,
        category: StyleCategory,
        face_shape: &str,
        limit: usize,
    ) -> Result<Vec<Style>, CatalogError> {
        let query = format!(
            r#"
            SELECT {STYLE_COLUMNS}
            FROM styles
            WHERE category = $1 AND $2 = ANY(suited_face_shapes)
            ORDER BY seq
            LIMIT $3
            "#
        );

        let rows = sqlx::query(&query)
            .bind(category.as_str())
            .bind(face_shape)
            .bind(sql_limit(limit))
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            "Catalog returned {} {} styles for face shape {}",
            rows.len(),
            category,
            face_shape
        );

        rows.iter().map(style_from_row).collect()
    }

    async fn all(&self) -> Result<Vec<Style>, CatalogError> {
        let query = format!("SELECT {STYLE_COLUMNS} FROM styles ORDER BY seq");
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        rows.iter().map(style_from_row).collect()
    }

    /// Delete everything and insert the batch in one transaction
    async fn replace_all(&self, styles: Vec<NewStyle>) -> Result<Vec<Style>, CatalogError> {
        validate_styles(&styles)?;

        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM styles").execute(&mut *tx).await?;
        tracing::info!("Cleared {} existing styles", deleted.rows_affected());

        let insert = r#"
            INSERT INTO styles (
                id, name, description, image_url, category, suited_face_shapes,
                difficulty, maintenance, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#;

        let mut inserted = Vec::with_capacity(styles.len());
        for new_style in styles {
            let style = new_style.into_style();
            let shapes: Vec<String> = style
                .suited_face_shapes
                .iter()
                .map(|shape| shape.as_str().to_string())
                .collect();

            sqlx::query(insert)
                .bind(style.id)
                .bind(&style.name)
                .bind(&style.description)
                .bind(&style.image_url)
                .bind(style.category.as_str())
                .bind(&shapes)
                .bind(style.difficulty.as_str())
                .bind(style.maintenance.as_str())
                .bind(style.created_at)
                .bind(style.updated_at)
                .execute(&mut *tx)
                .await?;

            inserted.push(style);
        }

        tx.commit().await?;

        tracing::info!("Inserted {} styles", inserted.len());
        Ok(inserted)
    }

    async fn health_check(&self) -> Result<bool, CatalogError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// LIMIT values past the range of BIGINT saturate instead of wrapping negative
fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
