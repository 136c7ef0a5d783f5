use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            // No DATABASE_URL: compose one from the discrete connection parameters.
            Err(_) => {
                let user = std::env::var("DB_USER").unwrap_or_else(|_| "postgres".into());
                let password = std::env::var("DB_PASSWORD").unwrap_or_else(|_| "123".into());
                let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
                let port = std::env::var("DB_PORT").unwrap_or_else(|_| "5432".into());
                let name = std::env::var("DB_NAME").unwrap_or_else(|_| "security".into());
                format!("postgres://{}:{}@{}:{}/{}", user, password, host, port, name)
            }
        };
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        Ok(Self {
            database_url,
            jwt_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_url_from_parts() {
        std::env::remove_var("DATABASE_URL");
        std::env::set_var("DB_USER", "svc");
        std::env::set_var("DB_PASSWORD", "pw");
        std::env::set_var("DB_HOST", "db.internal");
        std::env::set_var("DB_PORT", "6543");
        std::env::set_var("DB_NAME", "users");
        std::env::set_var("JWT_SECRET", "s3cret");

        let config = AppConfig::from_env().expect("config should load");
        assert_eq!(config.database_url, "postgres://svc:pw@db.internal:6543/users");
        assert_eq!(config.jwt_secret, "s3cret");
    }
}
