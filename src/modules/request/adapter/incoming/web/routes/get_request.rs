use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::request::application::domain::entities::RequestDetail;
use crate::request::application::ports::incoming::use_cases::GetRequestError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get one of my requests
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request with reference images", body = inline(SuccessResponse<RequestDetail>)),
        (status = 403, description = "Caller does not own the request", body = ErrorResponse),
        (status = 404, description = "Request not found", body = ErrorResponse),
    )
)]
#[get("/api/requests/{id}")]
pub async fn get_request_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(request_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("REQUEST_NOT_FOUND", "Request not found");
    };

    match data
        .request
        .get
        .execute(request_id, UserId::from(user.user_id))
        .await
    {
        Ok(request) => ApiResponse::success(request),
        Err(GetRequestError::NotFound) => {
            ApiResponse::not_found("REQUEST_NOT_FOUND", "Request not found")
        }
        Err(GetRequestError::Forbidden) => ApiResponse::forbidden("FORBIDDEN", "Access denied"),
        Err(e @ GetRequestError::QueryFailed(_)) => {
            error!(error = %e, %request_id, "Failed to fetch request");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
