use crate::config::{env_or, env_parse, env_required, ConfigError};

/// HS256 requires a key of at least 32 bytes.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub expiry_seconds: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_EXPIRY` (seconds, default one day).
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env_required("JWT_SECRET")?;
        let issuer = env_or("JWT_ISSUER", "commission-tracker");
        let expiry_seconds = env_parse("JWT_EXPIRY", 86_400_i64)?;

        Self::new(secret_key, issuer, expiry_seconds)
    }

    pub fn new(
        secret_key: String,
        issuer: String,
        expiry_seconds: i64,
    ) -> Result<Self, ConfigError> {
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters long", MIN_SECRET_LEN),
            });
        }

        if expiry_seconds <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer,
            expiry_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn accepts_long_enough_secret() {
        let config = JwtConfig::new(SECRET.to_string(), "issuer".into(), 60).unwrap();
        assert_eq!(config.expiry_seconds, 60);
    }

    #[test]
    fn rejects_short_secret() {
        let err = JwtConfig::new("short".into(), "issuer".into(), 60).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JWT_SECRET", .. }));
    }

    #[test]
    fn rejects_non_positive_expiry() {
        let err = JwtConfig::new(SECRET.to_string(), "issuer".into(), 0).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JWT_EXPIRY", .. }));
    }
}
