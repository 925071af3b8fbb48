use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::extract_token_from_header;
use crate::auth::application::domain::entities::UserInfo;
use crate::auth::application::ports::incoming::use_cases::ValidateTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ValidateTokenResponse {
    #[schema(example = true)]
    pub valid: bool,
    pub user: UserInfo,
}

/// Validate the current session
///
/// Verifies the bearer token and returns the current account state.
#[utoipa::path(
    get,
    path = "/api/auth/validate",
    tag = "auth",
    responses(
        (status = 200, description = "Token is valid", body = inline(SuccessResponse<ValidateTokenResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/auth/validate")]
pub async fn validate_token_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let Some(token) = extract_token_from_header(&req) else {
        return ApiResponse::unauthorized("MISSING_AUTH_HEADER", "No token provided");
    };

    match data.auth.validate.execute(&token).await {
        Ok(user) => ApiResponse::success(ValidateTokenResponse { valid: true, user }),
        Err(ValidateTokenError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        Err(ValidateTokenError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e @ ValidateTokenError::QueryError(_)) => {
            error!(error = %e, "Token validation failed");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
