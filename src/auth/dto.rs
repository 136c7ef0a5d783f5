use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::claims::Claims;
use crate::users::repo_types::User;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public part of the user returned by the auth endpoints.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Response returned by a token refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Echo of the decoded claims behind the token gate.
#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
    pub user: Claims,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_never_carries_a_password() {
        let user = PublicUser {
            id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@x.com".into(),
            role: "user".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn auth_response_shape() {
        let response = AuthResponse {
            token: "tok".into(),
            user: PublicUser {
                id: Uuid::new_v4(),
                name: "A".into(),
                email: "a@x.com".into(),
                role: "admin".into(),
            },
        };
        let value: serde_json::Value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["token"], "tok");
        assert_eq!(value["user"]["role"], "admin");
        assert!(value["user"].get("password").is_none());
    }
}
