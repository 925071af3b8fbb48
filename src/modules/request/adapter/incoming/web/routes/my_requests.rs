use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::request::application::domain::entities::RequestSummary;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List my requests
///
/// The caller's own requests, newest first.
#[utoipa::path(
    get,
    path = "/api/requests/my-requests",
    tag = "requests",
    responses(
        (status = 200, description = "Caller's requests", body = inline(SuccessResponse<Vec<RequestSummary>>)),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 403, description = "Invalid token", body = ErrorResponse),
    )
)]
#[get("/api/requests/my-requests")]
pub async fn my_requests_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.request.list_mine.execute(UserId::from(user.user_id)).await {
        Ok(requests) => ApiResponse::success(requests),
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Failed to list requests");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
