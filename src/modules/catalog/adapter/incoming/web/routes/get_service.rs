use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::catalog::application::domain::entities::Service;
use crate::catalog::application::ports::incoming::use_cases::GetServiceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a service
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service with active options", body = inline(SuccessResponse<Service>)),
        (status = 404, description = "Unknown or inactive service", body = ErrorResponse),
    )
)]
#[get("/api/services/{id}")]
pub async fn get_service_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Ok(service_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found");
    };

    match data.catalog.get.execute(service_id).await {
        Ok(service) => ApiResponse::success(service),
        Err(GetServiceError::NotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(e @ GetServiceError::QueryFailed(_)) => {
            error!(error = %e, %service_id, "Failed to fetch service");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
