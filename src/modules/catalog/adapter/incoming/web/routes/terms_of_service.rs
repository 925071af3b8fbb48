use actix_web::{get, Responder};

use crate::api::schemas::SuccessResponse;
use crate::catalog::application::domain::terms::{terms_of_service, TermsOfService};
use crate::shared::api::ApiResponse;

/// Commission terms of service
#[utoipa::path(
    get,
    path = "/api/services/terms-of-service",
    tag = "services",
    responses(
        (status = 200, description = "Static terms document", body = inline(SuccessResponse<TermsOfService>)),
    )
)]
#[get("/api/services/terms-of-service")]
pub async fn terms_of_service_handler() -> impl Responder {
    ApiResponse::success(terms_of_service())
}
