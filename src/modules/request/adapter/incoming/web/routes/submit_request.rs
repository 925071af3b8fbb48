use actix_multipart::Multipart;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use tracing::{error, warn};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SubmitRequestForm, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::auth::adapter::incoming::web::routes::register_error_response;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{RegisterCommand, RegisterCommandError};
use crate::catalog::application::domain::entities::OptionSelection;
use crate::request::application::domain::entities::RequestCounts;
use crate::request::application::ports::incoming::use_cases::{
    Requester, RequesterIdentity, SubmitRequestCommand, SubmitRequestError, SubmittedRequest,
};
use crate::shared::api::ApiResponse;
use crate::shared::multipart::{read_multipart, MultipartError, MultipartForm};
use crate::shared::storage::UploadPolicy;
use crate::AppState;

fn invalid(message: &str) -> HttpResponse {
    ApiResponse::bad_request("VALIDATION_ERROR", message)
}

fn parse_count(form: &MultipartForm, field: &str, default: i32) -> Result<i32, HttpResponse> {
    match form.text(field) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|_| invalid(&format!("{} must be a whole number", field))),
    }
}

fn parse_flag(form: &MultipartForm, field: &str) -> bool {
    form.text(field)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "on" | "yes"))
        .unwrap_or(false)
}

fn requester_from(form: &MultipartForm, viewer: &OptionalUser) -> Result<RequesterIdentity, HttpResponse> {
    if let Some(user) = viewer.user() {
        return Ok(RequesterIdentity::Known(Requester {
            user_id: UserId::from(user.user_id),
            username: user.username.clone(),
            is_vip: user.is_vip,
        }));
    }

    RegisterCommand::new(
        form.text_owned("username").unwrap_or_default(),
        form.text_owned("email").unwrap_or_default(),
        form.text_owned("password").unwrap_or_default(),
    )
    .map(RequesterIdentity::NewAccount)
    .map_err(|e| match e {
        RegisterCommandError::MissingFields => {
            invalid("Username, password, and email are required for new users")
        }
        other => invalid(&other.to_string()),
    })
}

fn parse_submission(
    mut form: MultipartForm,
    viewer: &OptionalUser,
) -> Result<SubmitRequestCommand, HttpResponse> {
    let service_id = match form.text("service_id") {
        None => None,
        Some(raw) => Some(Uuid::parse_str(raw).map_err(|_| invalid("Invalid service ID"))?),
    };

    let counts = RequestCounts::new(
        parse_count(&form, "character_count", 1)?,
        parse_count(&form, "alternative_count", 0)?,
        parse_count(&form, "pose_count", 1)?,
    )
    .map_err(|e| invalid(&e.to_string()))?;

    let selections: Vec<OptionSelection> = match form.text("options") {
        None => Vec::new(),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|_| invalid("options must be a JSON array of {option_id, value}"))?,
    };

    let requester = requester_from(&form, viewer)?;
    let is_nsfw = parse_flag(&form, "is_nsfw");
    let description = form.text_owned("description");
    let references = form.take_files("references");

    SubmitRequestCommand::new(
        service_id,
        description,
        counts,
        is_nsfw,
        selections,
        references,
        requester,
    )
    .map_err(|e| invalid(&e.to_string()))
}

/// Submit a commission request
///
/// Accepts `multipart/form-data`. Anonymous callers must also send
/// `username`, `email` and `password`; they are registered and receive a token.
/// The price is computed server-side.
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = "requests",
    request_body(content = SubmitRequestForm, content_type = "multipart/form-data"),
    responses(
        (
            status = 201,
            description = "Request stored",
            body = inline(SuccessResponse<SubmittedRequest>),
            example = json!({
                "success": true,
                "data": {
                    "request_id": "6f1c2a9e-8d44-4c1e-9a59-2f9f3e0d8b11",
                    "total_price": 40.0,
                    "token": null
                }
            })
        ),
        (status = 400, description = "Invalid input, bad upload or username/email taken", body = ErrorResponse),
        (status = 404, description = "Unknown or inactive service", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/requests")]
pub async fn submit_request_handler(
    viewer: OptionalUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let policy = UploadPolicy::reference_image();

    let form = match read_multipart(payload, &policy).await {
        Ok(form) => form,
        Err(e @ MultipartError::FieldTooLarge { .. }) => {
            return ApiResponse::error(StatusCode::BAD_REQUEST, "FILE_TOO_LARGE", &e.to_string())
        }
        Err(e) => return invalid(&e.to_string()),
    };

    let command = match parse_submission(form, &viewer) {
        Ok(cmd) => cmd,
        Err(resp) => return resp,
    };

    match data.request.submit.execute(command).await {
        Ok(submitted) => ApiResponse::created(submitted),
        Err(SubmitRequestError::ServiceNotFound) => {
            ApiResponse::not_found("SERVICE_NOT_FOUND", "Service not found")
        }
        Err(SubmitRequestError::Registration(e)) => {
            warn!(error = %e, "Inline registration failed");
            register_error_response(e, data.expose_error_details)
        }
        Err(e) => {
            error!(error = %e, "Request submission failed");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
