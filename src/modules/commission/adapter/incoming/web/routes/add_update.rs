use actix_multipart::Multipart;
use actix_web::{http::StatusCode, post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::{CommissionUpdateForm, ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OperatorUser;
use crate::commission::application::ports::incoming::use_cases::{
    AddUpdateCommand, AddUpdateError, AddedUpdate,
};
use crate::shared::api::ApiResponse;
use crate::shared::multipart::{read_multipart, MultipartError};
use crate::shared::storage::UploadPolicy;
use crate::AppState;

/// Post a progress update
///
/// Operator only. `multipart/form-data` with a required `title`, an optional
/// `description` and an optional `image` (image or mp4/webm video). The
/// client is emailed about the update.
#[utoipa::path(
    post,
    path = "/api/commissions/{id}/updates",
    tag = "commissions",
    params(("id" = Uuid, Path, description = "Commission ID")),
    request_body(content = CommissionUpdateForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Update stored", body = inline(SuccessResponse<AddedUpdate>)),
        (status = 400, description = "Missing title or bad upload", body = ErrorResponse),
        (status = 403, description = "Caller is not the operator", body = ErrorResponse),
        (status = 404, description = "Commission not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/commissions/{id}/updates")]
pub async fn add_update_handler(
    operator: OperatorUser,
    path: web::Path<String>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(commission_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("COMMISSION_NOT_FOUND", "Commission not found");
    };

    let policy = UploadPolicy::commission_media();

    let mut form = match read_multipart(payload, &policy).await {
        Ok(form) => form,
        Err(e @ MultipartError::FieldTooLarge { .. }) => {
            return ApiResponse::error(StatusCode::BAD_REQUEST, "FILE_TOO_LARGE", &e.to_string())
        }
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let media = form.take_file("image");
    let command = match AddUpdateCommand::new(
        commission_id,
        form.text_owned("title"),
        form.text_owned("description"),
        media,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.commission.add_update.execute(command).await {
        Ok(added) => {
            info!(
                %commission_id,
                update_id = %added.update_id,
                operator = %operator.0.username,
                "Commission update posted"
            );
            ApiResponse::created(added)
        }
        Err(AddUpdateError::NotFound) => {
            ApiResponse::not_found("COMMISSION_NOT_FOUND", "Commission not found")
        }
        Err(e) => {
            error!(error = %e, %commission_id, "Failed to add commission update");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
