use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::catalog::application::domain::{entities::OptionSelection, pricing::PriceQuote};
use crate::catalog::application::ports::incoming::use_cases::{
    CalculatePriceCommand, CalculatePriceError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct CalculatePriceRequestDto {
    pub service_id: Option<Uuid>,
    #[serde(default)]
    pub options: Vec<OptionSelection>,
}

/// Calculate a price
///
/// Evaluates the selected option formulas against the service base price.
/// VIP callers receive a 25% discount; the complexity tier is unaffected.
#[utoipa::path(
    post,
    path = "/api/services/calculate-price",
    tag = "services",
    request_body = CalculatePriceRequestDto,
    responses(
        (
            status = 200,
            description = "Price quote",
            body = inline(SuccessResponse<PriceQuote>),
            example = json!({
                "success": true,
                "data": {
                    "base_price": 35.0,
                    "total_price": 48.0,
                    "discount": 0.0,
                    "complexity": "Mid"
                }
            })
        ),
        (status = 400, description = "Missing service id", body = ErrorResponse),
        (status = 404, description = "Unknown or inactive service", body = ErrorResponse),
    )
)]
#[post("/api/services/calculate-price")]
pub async fn calculate_price_handler(
    viewer: OptionalUser,
    req: web::Json<CalculatePriceRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CalculatePriceCommand::new(dto.service_id, dto.options, viewer.is_vip()) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.catalog.calculate_price.execute(command).await {
        Ok(quote) => ApiResponse::success(quote),
        Err(CalculatePriceError::ServiceNotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(e @ CalculatePriceError::QueryFailed(_)) => {
            error!(error = %e, "Price calculation failed");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
