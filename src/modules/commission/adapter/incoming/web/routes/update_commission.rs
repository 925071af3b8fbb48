use actix_web::{patch, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OperatorUser;
use crate::commission::application::domain::status::CommissionStatus;
use crate::commission::application::ports::incoming::use_cases::{
    CommissionState, UpdateCommissionCommand, UpdateCommissionError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommissionDto {
    pub status: Option<String>,
    pub progress: Option<String>,
    pub expected_completion_date: Option<DateTime<Utc>>,
    pub is_public_work: Option<bool>,
}

/// Edit a commission
///
/// Operator only. Status can only move forward
/// (`Accepted` → `Working` → `Waiting` → `Finished`); reaching `Finished`
/// stamps the completion date. A status change emails the client.
#[utoipa::path(
    patch,
    path = "/api/commissions/{id}",
    tag = "commissions",
    params(("id" = Uuid, Path, description = "Commission ID")),
    request_body = UpdateCommissionDto,
    responses(
        (status = 200, description = "Commission after the edit", body = inline(SuccessResponse<CommissionState>)),
        (status = 400, description = "No changes, bad status or backwards transition", body = ErrorResponse),
        (status = 403, description = "Caller is not the operator", body = ErrorResponse),
        (status = 404, description = "Commission not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/commissions/{id}")]
pub async fn update_commission_handler(
    operator: OperatorUser,
    path: web::Path<String>,
    body: web::Json<UpdateCommissionDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(commission_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("COMMISSION_NOT_FOUND", "Commission not found");
    };
    let dto = body.into_inner();

    let status = match dto.status.as_deref().map(str::parse::<CommissionStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(e)) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let command = match UpdateCommissionCommand::new(
        commission_id,
        status,
        dto.progress,
        dto.expected_completion_date,
        dto.is_public_work,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.commission.update.execute(command).await {
        Ok(state) => {
            info!(
                %commission_id,
                status = %state.status,
                operator = %operator.0.username,
                "Commission updated"
            );
            ApiResponse::success(state)
        }
        Err(UpdateCommissionError::NotFound) => {
            ApiResponse::not_found("COMMISSION_NOT_FOUND", "Commission not found")
        }
        Err(e @ UpdateCommissionError::InvalidTransition { .. }) => {
            ApiResponse::bad_request("INVALID_STATUS_TRANSITION", &e.to_string())
        }
        Err(e) => {
            error!(error = %e, %commission_id, "Failed to update commission");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
