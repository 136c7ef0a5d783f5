use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::auth::claims::Claims;
use crate::state::AppState;

/// Tokens live exactly one hour from issuance; the window is fixed.
pub const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Holds the JWT signing and verification keys.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.config.jwt_secret.as_bytes())
    }
}

impl JwtKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: TOKEN_TTL,
        }
    }

    /// Sign a fresh token for the given identity.
    pub fn issue(&self, id: Uuid, email: &str, role: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            id,
            email: email.to_owned(),
            role: role.to_owned(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        // decode accepts `exp == now`; the window is [iat, exp), so the
        // boundary second is already out.
        if data.claims.exp <= OffsetDateTime::now_utc().unix_timestamp() as usize {
            anyhow::bail!("token expired");
        }
        debug!(user_id = %data.claims.id, "jwt verified");
        Ok(data.claims)
    }
}
