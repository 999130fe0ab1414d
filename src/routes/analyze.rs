use actix_multipart::{Multipart, MultipartError};
use actix_web::{web, HttpResponse, Responder};
use futures_util::TryStreamExt;
use tracing::Instrument;
use crate::core::AnalysisError;
use crate::models::{requests::check_media_type, ErrorResponse, ImageUpload, UploadError};
use crate::routes::auth::AuthenticatedUser;
use crate::routes::AppState;

/// Multipart field carrying the photo
pub const IMAGE_FIELD: &str = "image";

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/analyze", web::post().to(analyze_image))
        .route("/analyze/styles", web::get().to(list_styles));
}

/// Analyze endpoint
///
/// POST /api/analyze
///
/// Multipart form with a single `image` file field (image/*, at most 5 MB).
/// Responds with:
/// ```json
/// {
///   "face_shape": "Oval",
///   "recommendations": { "hairstyles": [...], "beardStyles": [...] }
/// }
/// ```
async fn analyze_image(
    user: AuthenticatedUser,
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, AnalysisError> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("analyze", %request_id, user_id = %user.user_id());

    async move {
        let upload = read_image_field(payload, state.max_upload_bytes).await?;

        tracing::info!(
            "Received {} byte {} upload ({})",
            upload.bytes.len(),
            upload.mime_type,
            upload.file_name.as_deref().unwrap_or("unnamed")
        );

        let response = state.recommender.recommend(&upload).await?;
        Ok(HttpResponse::Ok().json(response))
    }
    .instrument(span)
    .await
}

fn multipart_error(err: MultipartError) -> AnalysisError {
    tracing::info!("Malformed multipart upload: {}", err);
    AnalysisError::Validation(format!("Invalid upload: {}", err))
}

/// Pull the `image` field out of the form, rejecting non-image media types
/// before any of the file is buffered
async fn read_image_field(mut payload: Multipart, max_bytes: usize) -> Result<ImageUpload, AnalysisError> {
    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let mime_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        check_media_type(&mime_type)?;

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(UploadError::TooLarge { limit: max_bytes }.into());
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(ImageUpload::new(bytes, mime_type, file_name, max_bytes)?);
    }

    Err(UploadError::Missing.into())
}

/// Full catalog dump, for diagnostics
///
/// GET /api/analyze/styles
async fn list_styles(user: AuthenticatedUser, state: web::Data<AppState>) -> impl Responder {
    match state.recommender.catalog().all().await {
        Ok(styles) => {
            tracing::debug!("User {} listed {} styles", user.user_id(), styles.len());
            HttpResponse::Ok().json(styles)
        }
        Err(e) => {
            tracing::error!("Failed to fetch styles: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "internal_error".to_string(),
                message: "Error fetching styles".to_string(),
                status_code: 500,
            })
        }
    }
}
