use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while checking a bearer credential
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("No token, authorization denied")]
    MissingToken,

    #[error("Authorization header must use the Bearer scheme")]
    MalformedHeader,

    #[error("Token has expired")]
    Expired,

    #[error("Token is not valid")]
    InvalidToken,
}

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId", alias = "sub")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: usize,
}

/// Verifies HS256 session tokens against the shared secret
///
/// Issuing tokens is the job of the account service; this side only checks
/// them.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decode and validate a raw token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Validate the value of an `Authorization` header
    pub fn verify_header(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let header = header.map(str::trim).filter(|h| !h.is_empty()).ok_or(AuthError::MissingToken)?;

        let (scheme, token) = header.split_once(' ').ok_or(AuthError::MalformedHeader)?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AuthError::MalformedHeader);
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        self.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token(secret: &str, exp_offset: i64) -> String {
        let claims = Claims {
            user_id: "user-42".to_string(),
            email: Some("user@example.com".to_string()),
            exp: (chrono::Utc::now().timestamp() + exp_offset) as usize,
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    #[test]
    fn test_valid_bearer_header() {
        let verifier = TokenVerifier::new(SECRET);
        let header = format!("Bearer {}", token(SECRET, 3600));

        let claims = verifier.verify_header(Some(&header)).unwrap();
        assert_eq!(claims.user_id, "user-42");
        assert_eq!(claims.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_missing_and_malformed_headers() {
        let verifier = TokenVerifier::new(SECRET);
        assert_eq!(verifier.verify_header(None).unwrap_err(), AuthError::MissingToken);
        assert_eq!(verifier.verify_header(Some("  ")).unwrap_err(), AuthError::MissingToken);
        assert_eq!(verifier.verify_header(Some("Bearer ")).unwrap_err(), AuthError::MalformedHeader);
        assert_eq!(verifier.verify_header(Some("Basic abc")).unwrap_err(), AuthError::MalformedHeader);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let verifier = TokenVerifier::new(SECRET);
        let header = format!("Bearer {}", token("other-secret", 3600));
        assert_eq!(verifier.verify_header(Some(&header)).unwrap_err(), AuthError::InvalidToken);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let verifier = TokenVerifier::new(SECRET);
        let header = format!("Bearer {}", token(SECRET, -60));
        assert_eq!(verifier.verify_header(Some(&header)).unwrap_err(), AuthError::Expired);
    }

    #[test]
    fn test_sub_claim_is_accepted() {
        let raw = serde_json::json!({ "sub": "abc", "exp": 4_102_444_800u64 });
        let claims: Claims = serde_json::from_value(raw).unwrap();
        assert_eq!(claims.user_id, "abc");
    }
}
