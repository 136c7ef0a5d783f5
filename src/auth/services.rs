use sqlx::PgPool;
use tracing::{info, warn};

use crate::auth::claims::Claims;
use crate::auth::dto::{LoginRequest, RegisterRequest};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::error::ApiError;
use crate::users::repo_types::{NewUser, User};

pub async fn register(db: &PgPool, payload: RegisterRequest) -> Result<User, ApiError> {
    if User::find_by_email(db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "registration with taken email");
        return Err(ApiError::DuplicateEmail);
    }

    let hash = hash_password(&payload.password)?;
    let user = User::insert(
        db,
        NewUser {
            name: &payload.name,
            email: &payload.email,
            password_hash: Some(&hash),
            role: &payload.role,
            status: "Active",
        },
    )
    .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

pub async fn login(
    db: &PgPool,
    keys: &JwtKeys,
    payload: LoginRequest,
) -> Result<(String, User), ApiError> {
    let user = User::find_by_email(db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login with unknown email");
            ApiError::InvalidCredentials
        })?;

    // Status gates before the password is even looked at.
    if user.status != "Active" {
        warn!(user_id = %user.id, status = %user.status, "login on inactive account");
        return Err(ApiError::InactiveAccount);
    }

    // Rows created through the users CRUD carry no credential.
    let hash = user.password_hash.as_deref().ok_or_else(|| {
        warn!(user_id = %user.id, "login against account without a password");
        ApiError::InvalidCredentials
    })?;

    if !verify_password(&payload.password, hash)? {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    // Login must still succeed if the timestamp write fails.
    if let Err(e) = User::update_last_login(db, user.id).await {
        warn!(error = %e, user_id = %user.id, "failed to record last_login");
    }

    let token = keys.issue(user.id, &user.email, &user.role)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((token, user))
}

pub fn refresh(keys: &JwtKeys, claims: &Claims) -> Result<String, ApiError> {
    let token = keys.issue(claims.id, &claims.email, &claims.role)?;
    info!(user_id = %claims.id, "token refreshed");
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn refresh_preserves_identity_claims_with_fresh_expiry() {
        let keys = JwtKeys::new(b"test-secret");
        let user_id = Uuid::new_v4();
        let original = keys.issue(user_id, "a@x.com", "admin").expect("issue");
        let claims = keys.verify(&original).expect("verify");

        let refreshed = refresh(&keys, &claims).expect("refresh");
        let new_claims = keys.verify(&refreshed).expect("verify refreshed");

        assert_eq!(new_claims.id, claims.id);
        assert_eq!(new_claims.email, claims.email);
        assert_eq!(new_claims.role, claims.role);
        assert!(new_claims.exp >= claims.exp);
    }
}
