use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default request timeout for the face analysis service
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Errors that can occur when calling the face analysis service
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Face analysis service unreachable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Could not detect face shape from image")]
    NoFaceShape,

    #[error("Face analysis service returned status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Maps an image to a face-shape tag
///
/// Implementations return the tag exactly as the backend reports it.
#[async_trait]
pub trait FaceShapeClassifier: Send + Sync {
    async fn classify(&self, image: &[u8], mime_type: &str) -> Result<String, ClassifierError>;
}

#[derive(Debug, Serialize)]
struct AnalyzeFaceRequest<'a> {
    image: String,
    mime_type: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct AnalyzeFaceResponse {
    #[serde(default)]
    face_shape: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AnalyzeFaceResponse {
    fn error_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

/// HTTP client for the external face analysis service
///
/// Sends a single `POST {base_url}/analyze-face` per image with a bounded
/// timeout. Failures are reported once; nothing is retried.
pub struct HttpClassifier {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpClassifier {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClassifierError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self) -> String {
        format!("{}/analyze-face", self.base_url.trim_end_matches('/'))
    }
}

/// Connection failures and timeouts mean the backend is out of reach
fn transport_error(err: reqwest::Error) -> ClassifierError {
    if err.is_connect() || err.is_timeout() {
        ClassifierError::Unavailable(err.to_string())
    } else {
        ClassifierError::RequestError(err)
    }
}

#[async_trait]
impl FaceShapeClassifier for HttpClassifier {
    async fn classify(&self, image: &[u8], mime_type: &str) -> Result<String, ClassifierError> {
        let payload = AnalyzeFaceRequest {
            image: STANDARD.encode(image),
            mime_type,
        };

        tracing::debug!(
            "Sending {} byte image ({}) to {}",
            image.len(),
            mime_type,
            self.endpoint()
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        let parsed: Option<AnalyzeFaceResponse> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            tracing::warn!("Face analysis service returned {}: {}", status, body);
            return match parsed.and_then(AnalyzeFaceResponse::error_message) {
                Some(message) => Err(ClassifierError::Rejected(message)),
                None => Err(ClassifierError::UnexpectedStatus(status)),
            };
        }

        parsed
            .and_then(|p| p.face_shape)
            .filter(|shape| !shape.trim().is_empty())
            .ok_or(ClassifierError::NoFaceShape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn classifier(url: &str) -> HttpClassifier {
        HttpClassifier::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_returns_face_shape_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze-face")
            .match_body(Matcher::Json(serde_json::json!({
                "image": STANDARD.encode(PNG_BYTES),
                "mime_type": "image/png",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"face_shape":"Heart","confidence":"high"}"#)
            .create_async()
            .await;

        let shape = classifier(&server.url()).classify(PNG_BYTES, "image/png").await.unwrap();

        assert_eq!(shape, "Heart");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unknown_tag_is_not_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/analyze-face")
            .with_status(200)
            .with_body(r#"{"face_shape":"Triangle"}"#)
            .create_async()
            .await;

        let shape = classifier(&server.url()).classify(PNG_BYTES, "image/png").await.unwrap();
        assert_eq!(shape, "Triangle");
    }

    #[tokio::test]
    async fn test_missing_face_shape() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/analyze-face")
            .with_status(200)
            .with_body(r#"{"confidence":"low"}"#)
            .create_async()
            .await;

        let err = classifier(&server.url()).classify(PNG_BYTES, "image/png").await.unwrap_err();
        assert!(matches!(err, ClassifierError::NoFaceShape));
    }

    #[tokio::test]
    async fn test_error_message_is_passed_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/analyze-face")
            .with_status(400)
            .with_body(r#"{"message":"No face detected in the image"}"#)
            .create_async()
            .await;

        let err = classifier(&server.url()).classify(PNG_BYTES, "image/png").await.unwrap_err();
        match err {
            ClassifierError::Rejected(message) => assert_eq!(message, "No face detected in the image"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_field_is_passed_through() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/analyze-face")
            .with_status(400)
            .with_body(r#"{"error":"No image data provided"}"#)
            .create_async()
            .await;

        let err = classifier(&server.url()).classify(PNG_BYTES, "image/png").await.unwrap_err();
        assert!(matches!(err, ClassifierError::Rejected(ref m) if m == "No image data provided"));
    }

    #[tokio::test]
    async fn test_bare_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/analyze-face")
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let err = classifier(&server.url()).classify(PNG_BYTES, "image/png").await.unwrap_err();
        assert!(matches!(err, ClassifierError::UnexpectedStatus(s) if s == StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = classifier(&format!("http://{}", addr))
            .classify(PNG_BYTES, "image/png")
            .await
            .unwrap_err();
        assert!(matches!(err, ClassifierError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _hold = tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });

        let client = HttpClassifier::new(format!("http://{}", addr), Duration::from_millis(200)).unwrap();
        let err = client.classify(PNG_BYTES, "image/png").await.unwrap_err();

        assert!(matches!(err, ClassifierError::Unavailable(_)));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = classifier("http://ai.local:8000/");
        assert_eq!(client.endpoint(), "http://ai.local:8000/analyze-face");
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }
}
