use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::claims::Claims;
use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// Extracts and validates the bearer token, yielding its claims.
pub struct AuthClaims(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);

        let auth = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        // Expect "Bearer <token>"
        let token = auth.strip_prefix("Bearer ").ok_or(ApiError::MissingToken)?;

        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "invalid or expired token");
            ApiError::InvalidToken
        })?;

        Ok(AuthClaims(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use uuid::Uuid;

    async fn extract(keys: &JwtKeys, header: Option<&str>) -> Result<AuthClaims, ApiError> {
        let mut builder = Request::builder().uri("/protected");
        if let Some(value) = header {
            builder = builder.header(axum::http::header::AUTHORIZATION, value);
        }
        let request = builder.body(()).expect("request");
        let (mut parts, _) = request.into_parts();
        AuthClaims::from_request_parts(&mut parts, keys).await
    }

    #[tokio::test]
    async fn rejects_request_without_header() {
        let keys = JwtKeys::new(b"test-secret");
        let err = extract(&keys, None).await.err().expect("rejection");
        assert!(matches!(err, ApiError::MissingToken));
    }

    #[tokio::test]
    async fn rejects_non_bearer_scheme() {
        let keys = JwtKeys::new(b"test-secret");
        let err = extract(&keys, Some("Basic dXNlcjpwdw=="))
            .await
            .err()
            .expect("rejection");
        assert!(matches!(err, ApiError::MissingToken));
    }

    #[tokio::test]
    async fn rejects_garbage_token() {
        let keys = JwtKeys::new(b"test-secret");
        let err = extract(&keys, Some("Bearer not.a.token"))
            .await
            .err()
            .expect("rejection");
        assert!(matches!(err, ApiError::InvalidToken));
    }

    #[tokio::test]
    async fn passes_claims_through_on_valid_token() {
        let keys = JwtKeys::new(b"test-secret");
        let user_id = Uuid::new_v4();
        let token = keys.issue(user_id, "a@x.com", "user").expect("issue");
        let AuthClaims(claims) = extract(&keys, Some(&format!("Bearer {token}")))
            .await
            .expect("extraction");
        assert_eq!(claims.id, user_id);
        assert_eq!(claims.role, "user");
    }
}
