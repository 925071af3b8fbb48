use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    TokenClaims, TokenError, TokenProvider, TokenSubject,
};

pub const STUB_TOKEN: &str = "stub-token";

/// Accepts any bearer token and decodes it to fixed claims, or rejects all tokens.
#[derive(Clone)]
pub struct StubTokenProvider {
    claims: Option<TokenClaims>,
}

impl StubTokenProvider {
    pub fn with_claims(user_id: Uuid, username: &str, is_vip: bool, is_operator: bool) -> Self {
        Self {
            claims: Some(TokenClaims {
                sub: user_id,
                username: username.to_string(),
                is_vip,
                is_operator,
                exp: 4_102_444_800,
                iat: 0,
                nbf: 0,
            }),
        }
    }

    pub fn client() -> Self {
        Self::with_claims(Uuid::new_v4(), "client", false, false)
    }

    pub fn vip() -> Self {
        Self::with_claims(Uuid::new_v4(), "vip", true, false)
    }

    pub fn operator() -> Self {
        Self::with_claims(Uuid::new_v4(), "operator", false, true)
    }

    pub fn rejecting() -> Self {
        Self { claims: None }
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.claims.as_ref().map(|c| c.sub)
    }

    pub fn into_app_data(self) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        web::Data::new(Arc::new(self) as Arc<dyn TokenProvider + Send + Sync>)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_token(&self, _subject: &TokenSubject) -> Result<String, TokenError> {
        Ok(STUB_TOKEN.to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.claims.clone().ok_or(TokenError::InvalidSignature)
    }
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", STUB_TOKEN))
}
