use serde::Deserialize;

/// Request body for direct user creation; no credentials are involved.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

/// Request body for a full user update.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

/// Query parameters accepted by the filter endpoint.
#[derive(Debug, Deserialize)]
pub struct UserFilter {
    pub role: Option<String>,
    pub status: Option<String>,
}

impl UserFilter {
    /// Predicates for the store. `?role=&status=` arrives as empty strings,
    /// which mean "not supplied".
    pub fn normalized(&self) -> (Option<&str>, Option<&str>) {
        (
            self.role.as_deref().filter(|v| !v.is_empty()),
            self.status.as_deref().filter(|v| !v.is_empty()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_params_are_optional() {
        let filter: UserFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.role.is_none());
        assert!(filter.status.is_none());

        let filter: UserFilter =
            serde_json::from_str(r#"{"role":"admin","status":"Active"}"#).unwrap();
        assert_eq!(filter.role.as_deref(), Some("admin"));
        assert_eq!(filter.status.as_deref(), Some("Active"));
    }

    #[test]
    fn empty_filter_values_mean_unsupplied() {
        let filter: UserFilter =
            serde_json::from_str(r#"{"role":"","status":"Active"}"#).unwrap();
        let (role, status) = filter.normalized();
        assert!(role.is_none());
        assert_eq!(status, Some("Active"));
    }
}
