use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OperatorUser;
use crate::commission::application::domain::entities::Tag;
use crate::commission::application::ports::incoming::use_cases::{
    TagCommissionCommand, TagCommissionError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TagCommissionDto {
    #[serde(default)]
    pub name: String,
}

/// Tag a commission
///
/// Operator only. Unknown tags are created; tagging twice is harmless.
#[utoipa::path(
    post,
    path = "/api/commissions/{id}/tags",
    tag = "commissions",
    params(("id" = Uuid, Path, description = "Commission ID")),
    request_body = TagCommissionDto,
    responses(
        (status = 200, description = "Tag attached", body = inline(SuccessResponse<Tag>)),
        (status = 400, description = "Empty or overlong tag name", body = ErrorResponse),
        (status = 403, description = "Caller is not the operator", body = ErrorResponse),
        (status = 404, description = "Commission not found", body = ErrorResponse),
    )
)]
#[post("/api/commissions/{id}/tags")]
pub async fn tag_commission_handler(
    _operator: OperatorUser,
    path: web::Path<String>,
    body: web::Json<TagCommissionDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(commission_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("COMMISSION_NOT_FOUND", "Commission not found");
    };

    let command = match TagCommissionCommand::new(commission_id, &body.name) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.commission.tag.execute(command).await {
        Ok(tag) => ApiResponse::success(tag),
        Err(TagCommissionError::NotFound) => {
            ApiResponse::not_found("COMMISSION_NOT_FOUND", "Commission not found")
        }
        Err(e) => {
            error!(error = %e, %commission_id, "Failed to tag commission");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
