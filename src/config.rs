use std::env;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Development,
    Test,
    Production,
}

impl RuntimeEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeEnv::Development => "development",
            RuntimeEnv::Test => "test",
            RuntimeEnv::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeEnv::Production)
    }
}

impl FromStr for RuntimeEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(RuntimeEnv::Development),
            "test" => Ok(RuntimeEnv::Test),
            "production" | "prod" => Ok(RuntimeEnv::Production),
            other => Err(ConfigError::Invalid {
                key: "RUST_ENV",
                reason: format!("unknown environment '{}'", other),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SmtpTransportConfig {
    /// Authenticated TLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher (Mailpit, MailHog).
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub from: String,
    pub operator_email: String,
    pub transport: SmtpTransportConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: RuntimeEnv,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    pub email: EmailConfig,
    pub upload_dir: String,
    pub argon2: Argon2Config,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads every setting once.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment: RuntimeEnv = env_or("RUST_ENV", "development").parse()?;

        let env_file = format!(".env.{}", environment.as_str());
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Ok(Self {
            environment,
            host: env_or("HOST", "127.0.0.1"),
            port: env_parse("PORT", 8080)?,
            database_url: env_required("DATABASE_URL")?,
            jwt: JwtConfig::from_env()?,
            email: EmailConfig::from_env()?,
            upload_dir: env_or("UPLOAD_DIR", "uploads"),
            argon2: Argon2Config {
                memory_kib: env_parse("ARGON2_MEMORY_KIB", 4 * 1024)?,
                iterations: env_parse("ARGON2_ITERATIONS", 3)?,
                parallelism: env_parse("ARGON2_PARALLELISM", 1)?,
            },
        })
    }

    /// Error details are only shown to clients outside production.
    pub fn expose_error_details(&self) -> bool {
        !self.environment.is_production()
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let from = env_required("EMAIL_FROM")?;
        let operator_email = env::var("OPERATOR_EMAIL").unwrap_or_else(|_| from.clone());

        let transport = match env::var("SMTP_SERVER") {
            Ok(server) if !server.trim().is_empty() => SmtpTransportConfig::Relay {
                server,
                username: env_required("SMTP_USERNAME")?,
                password: env_required("SMTP_PASSWORD")?,
            },
            _ => SmtpTransportConfig::Local {
                host: env_or("SMTP_HOST", "localhost"),
                port: env_parse("SMTP_PORT", 1025)?,
            },
        };

        Ok(Self {
            from,
            operator_email,
            transport,
        })
    }
}

pub fn env_required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn env_parse<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_env_parses_aliases() {
        assert_eq!("prod".parse::<RuntimeEnv>().unwrap(), RuntimeEnv::Production);
        assert_eq!("Development".parse::<RuntimeEnv>().unwrap(), RuntimeEnv::Development);
        assert!("staging".parse::<RuntimeEnv>().is_err());
    }

    #[test]
    fn only_production_hides_details() {
        assert!(RuntimeEnv::Production.is_production());
        assert!(!RuntimeEnv::Test.is_production());
    }

    #[test]
    fn env_parse_reports_bad_values() {
        std::env::set_var("CONFIG_TEST_BAD_PORT", "eighty");
        let result = env_parse::<u16>("CONFIG_TEST_BAD_PORT", 8080);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "CONFIG_TEST_BAD_PORT", .. })
        ));
        std::env::remove_var("CONFIG_TEST_BAD_PORT");
    }

    #[test]
    fn env_parse_falls_back_to_default() {
        let value = env_parse::<u32>("CONFIG_TEST_UNSET_VALUE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn env_required_rejects_blank() {
        std::env::set_var("CONFIG_TEST_BLANK", "   ");
        assert!(matches!(
            env_required("CONFIG_TEST_BLANK"),
            Err(ConfigError::Missing("CONFIG_TEST_BLANK"))
        ));
        std::env::remove_var("CONFIG_TEST_BLANK");
    }
}
