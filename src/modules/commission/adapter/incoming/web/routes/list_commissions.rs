use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use super::viewer_of;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::commission::application::domain::{status::CommissionStatus, views::CommissionListItem};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCommissionsQuery {
    /// Only commissions in this status, e.g. `Working`.
    pub status: Option<String>,
}

/// List commissions
///
/// Anonymous callers only see public or non-NSFW work, without prices,
/// descriptions or client names.
#[utoipa::path(
    get,
    path = "/api/commissions",
    tag = "commissions",
    params(ListCommissionsQuery),
    responses(
        (status = 200, description = "Commissions, newest first", body = inline(SuccessResponse<Vec<CommissionListItem>>)),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/commissions")]
pub async fn list_commissions_handler(
    viewer: OptionalUser,
    query: web::Query<ListCommissionsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match query.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<CommissionStatus>() {
            Ok(status) => Some(status),
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        },
    };

    match data.commission.list.execute(viewer_of(&viewer), status).await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => {
            error!(error = %e, "Failed to list commissions");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
