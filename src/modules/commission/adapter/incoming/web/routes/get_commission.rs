use actix_web::{get, http::StatusCode, web, Responder};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::viewer_of;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::commission::application::domain::views::CommissionView;
use crate::commission::application::ports::incoming::use_cases::GetCommissionError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Commission detail
///
/// Public work and any work seen by a signed-in user comes back in full,
/// with updates and tags. Anonymous callers get a limited view of private
/// work and a 403 for private NSFW work.
#[utoipa::path(
    get,
    path = "/api/commissions/{id}",
    tag = "commissions",
    params(("id" = Uuid, Path, description = "Commission ID")),
    responses(
        (status = 200, description = "Commission detail", body = inline(SuccessResponse<CommissionView>)),
        (
            status = 403,
            description = "Private NSFW work needs a token",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "AUTH_REQUIRED",
                    "message": "Authentication required to view this commission",
                    "details": { "is_nsfw": true }
                }
            })
        ),
        (status = 404, description = "Commission not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/commissions/{id}")]
pub async fn get_commission_handler(
    viewer: OptionalUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(commission_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("COMMISSION_NOT_FOUND", "Commission not found");
    };

    match data
        .commission
        .get
        .execute(commission_id, viewer_of(&viewer))
        .await
    {
        Ok(view) => ApiResponse::success(view),
        Err(GetCommissionError::NotFound) => {
            ApiResponse::not_found("COMMISSION_NOT_FOUND", "Commission not found")
        }
        Err(e @ GetCommissionError::AuthRequired) => ApiResponse::error_with_details(
            StatusCode::FORBIDDEN,
            "AUTH_REQUIRED",
            &e.to_string(),
            Some(json!({ "is_nsfw": true })),
        ),
        Err(e) => {
            error!(error = %e, %commission_id, "Failed to fetch commission");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
