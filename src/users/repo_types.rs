use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,     // unique user ID, assigned by the store
    pub name: String, // display name
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>, // argon2 hash, not exposed in JSON; absent for rows created without credentials
    pub role: String,   // free-form role string
    pub status: String, // only "Active" permits login
    pub last_login: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Insert payload for a new user row.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: Option<&'a str>,
    pub role: &'a str,
    pub status: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn user_row_never_serializes_its_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@x.com".into(),
            password_hash: Some("$argon2id$opaque".into()),
            role: "user".into(),
            status: "Active".into(),
            last_login: None,
            created_at: datetime!(2024-01-01 0:00 UTC),
            updated_at: datetime!(2024-01-01 0:00 UTC),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("a@x.com"));
        assert!(json.contains("Active"));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }
}
