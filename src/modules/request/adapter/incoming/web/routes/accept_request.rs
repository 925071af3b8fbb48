use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OperatorUser;
use crate::request::application::ports::incoming::use_cases::{
    AcceptRequestCommand, AcceptRequestError, AcceptedRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct AcceptRequestDto {
    pub expected_completion_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_public_work: bool,
}

/// Accept a request
///
/// Operator only. Creates the commission in `Accepted` status with a
/// complexity tier derived from the request price. The body is optional.
#[utoipa::path(
    post,
    path = "/api/requests/{id}/accept",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body(content = Option<AcceptRequestDto>),
    responses(
        (status = 201, description = "Commission created", body = inline(SuccessResponse<AcceptedRequest>)),
        (status = 403, description = "Caller is not the operator", body = ErrorResponse),
        (status = 404, description = "Request not found", body = ErrorResponse),
        (status = 409, description = "Request already accepted", body = ErrorResponse),
    )
)]
#[post("/api/requests/{id}/accept")]
pub async fn accept_request_handler(
    operator: OperatorUser,
    path: web::Path<String>,
    body: Option<web::Json<AcceptRequestDto>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(request_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("REQUEST_NOT_FOUND", "Request not found");
    };
    let dto = body.map(web::Json::into_inner).unwrap_or_default();

    let command = AcceptRequestCommand {
        request_id,
        expected_completion_date: dto.expected_completion_date,
        is_public_work: dto.is_public_work,
    };

    match data.request.accept.execute(command).await {
        Ok(accepted) => {
            info!(
                %request_id,
                commission_id = %accepted.commission_id,
                operator = %operator.0.username,
                "Commission opened"
            );
            ApiResponse::created(accepted)
        }
        Err(AcceptRequestError::NotFound) => {
            ApiResponse::not_found("REQUEST_NOT_FOUND", "Request not found")
        }
        Err(AcceptRequestError::AlreadyAccepted) => ApiResponse::conflict(
            "REQUEST_ALREADY_ACCEPTED",
            "Request has already been accepted",
        ),
        Err(e) => {
            error!(error = %e, %request_id, "Failed to accept request");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
