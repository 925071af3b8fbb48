use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenClaims, TokenProvider};
use crate::shared::api::ApiResponse;

/// Caller identity decoded from a valid bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub is_vip: bool,
    pub is_operator: bool,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            username: claims.username,
            is_vip: claims.is_vip,
            is_operator: claims.is_operator,
        }
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn token_provider(req: &HttpRequest) -> Option<&web::Data<Arc<dyn TokenProvider + Send + Sync>>> {
    req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
}

pub(crate) fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(tokens) = token_provider(req) else {
            tracing::error!("TokenProvider is not registered as app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ))));
        };

        match tokens.verify_token(&token) {
            Ok(claims) => ready(Ok(claims.into())),
            Err(_) => ready(Err(create_api_error(ApiResponse::forbidden(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// Identity when a valid token is present. A missing or invalid token
/// yields an anonymous caller instead of an error.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.0.as_ref()
    }

    pub fn is_vip(&self) -> bool {
        self.0.as_ref().is_some_and(|u| u.is_vip)
    }
}

impl FromRequest for OptionalUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = match (token_provider(req), extract_token_from_header(req)) {
            (Some(tokens), Some(token)) => match tokens.verify_token(&token) {
                Ok(claims) => Some(claims.into()),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring invalid token on optional-auth route");
                    None
                }
            },
            _ => None,
        };

        ready(Ok(OptionalUser(user)))
    }
}

/// Authenticated caller holding the operator flag.
#[derive(Debug, Clone)]
pub struct OperatorUser(pub AuthenticatedUser);

impl FromRequest for OperatorUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match AuthenticatedUser::from_request(req, payload).into_inner() {
            Ok(user) if user.is_operator => ready(Ok(OperatorUser(user))),
            Ok(user) => {
                tracing::warn!(user_id = %user.user_id, "Non-operator attempted operator action");
                ready(Err(create_api_error(ApiResponse::forbidden(
                    "OPERATOR_ONLY",
                    "Only the operator can perform this action",
                ))))
            }
            Err(e) => ready(Err(e)),
        }
    }
}
