use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;

use crate::auth::application::ports::outgoing::{
    TokenClaims, TokenError, TokenProvider, TokenSubject,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .field("expiry_seconds", &self.config.expiry_seconds)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_token(&self, subject: &TokenSubject) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.expiry_seconds);

        let claims = TokenClaims {
            sub: subject.user_id,
            username: subject.username.clone(),
            is_vip: subject.is_vip,
            is_operator: subject.is_operator,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;

            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token verification failed: token expired");
                    TokenError::TokenExpired
                }
                ErrorKind::ImmatureSignature => {
                    tracing::warn!("Token verification failed: token not yet valid");
                    TokenError::TokenNotYetValid
                }
                ErrorKind::InvalidSignature => {
                    tracing::warn!("Invalid token signature presented");
                    TokenError::InvalidSignature
                }
                ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                    tracing::warn!("Malformed token or unexpected algorithm");
                    TokenError::MalformedToken
                }
                _ => {
                    tracing::debug!(error = %e, "Token verification failed");
                    TokenError::MalformedToken
                }
            }
        })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn service_with(secret: &str, expiry_seconds: i64) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: secret.to_string(),
            issuer: "test_issuer".to_string(),
            expiry_seconds,
        })
    }

    fn create_test_jwt_service() -> JwtTokenService {
        service_with("test-secret-that-is-at-least-32-chars", 3600)
    }

    fn subject(is_vip: bool, is_operator: bool) -> TokenSubject {
        TokenSubject {
            user_id: Uuid::new_v4(),
            username: "erin".to_string(),
            is_vip,
            is_operator,
        }
    }

    #[test]
    fn test_generate_and_verify_token() {
        let service = create_test_jwt_service();
        let subject = subject(true, false);

        let token = service.generate_token(&subject).expect("token");
        let claims = service.verify_token(&token).expect("claims");

        assert_eq!(claims.sub, subject.user_id);
        assert_eq!(claims.username, "erin");
        assert!(claims.is_vip);
        assert!(!claims.is_operator);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_operator_flag_survives_round_trip() {
        let service = create_test_jwt_service();

        let token = service.generate_token(&subject(false, true)).unwrap();

        assert!(service.verify_token(&token).unwrap().is_operator);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        let result = service.verify_token("invalid.jwt.token");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = service_with("first-secret-that-is-at-least-32-chars", 3600);
        let verifier = service_with("other-secret-that-is-at-least-32-chars", 3600);

        let token = issuer.generate_token(&subject(false, false)).unwrap();

        assert!(matches!(
            verifier.verify_token(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Negative expiry puts exp well outside the 30 second leeway
        let service = service_with("test-secret-that-is-at-least-32-chars", -120);

        let token = service.generate_token(&subject(false, false)).unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(TokenError::TokenExpired)
        ));
    }
}
