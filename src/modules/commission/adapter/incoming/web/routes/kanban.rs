use actix_web::{get, web, Responder};
use tracing::error;

use super::viewer_of;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::commission::application::domain::views::KanbanBoard;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Kanban board
///
/// Pending requests plus every commission, grouped by status column.
#[utoipa::path(
    get,
    path = "/api/commissions/kanban",
    tag = "commissions",
    responses(
        (status = 200, description = "Board columns", body = inline(SuccessResponse<KanbanBoard>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/commissions/kanban")]
pub async fn kanban_handler(viewer: OptionalUser, data: web::Data<AppState>) -> impl Responder {
    match data.commission.kanban.execute(viewer_of(&viewer)).await {
        Ok(board) => ApiResponse::success(board),
        Err(e) => {
            error!(error = %e, "Failed to build kanban board");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
