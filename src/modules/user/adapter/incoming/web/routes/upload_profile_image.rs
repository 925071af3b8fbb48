use actix_multipart::Multipart;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde_json::json;
use tracing::error;

use crate::api::schemas::{BannerForm, ErrorResponse, ProfilePictureForm};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::shared::multipart::{read_multipart, MultipartError};
use crate::shared::storage::UploadPolicy;
use crate::user::application::domain::entities::ProfileImageKind;
use crate::user::application::ports::incoming::use_cases::{
    UploadProfileImageCommand, UploadProfileImageError,
};
use crate::AppState;

/// Shared body of both image endpoints; answers `{<field>: "/uploads/users/..."}`.
async fn upload_image(
    kind: ProfileImageKind,
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> HttpResponse {
    let policy = UploadPolicy::profile_image();

    let mut form = match read_multipart(payload, &policy).await {
        Ok(form) => form,
        Err(e @ MultipartError::FieldTooLarge { .. }) => {
            return ApiResponse::error(StatusCode::BAD_REQUEST, "FILE_TOO_LARGE", &e.to_string())
        }
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let Some(file) = form.take_file(kind.field_name()) else {
        return ApiResponse::bad_request("NO_FILE", "No file uploaded");
    };

    let command = match UploadProfileImageCommand::new(UserId::from(user.user_id), kind, file) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("INVALID_FILE", &e.to_string()),
    };

    match data.user.upload_image.execute(command).await {
        Ok(image) => ApiResponse::success(json!({ kind.field_name(): image.path })),
        Err(UploadProfileImageError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, field = kind.field_name(), "Image upload failed");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}

/// Upload a profile picture
///
/// Field `profile_picture`: jpg, jpeg, png or gif up to 5MB.
#[utoipa::path(
    post,
    path = "/api/users/profile-picture",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body(content = ProfilePictureForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored; returns `{profile_picture}`", body = serde_json::Value),
        (status = 400, description = "No file, wrong type or too large", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
    )
)]
#[post("/api/users/profile-picture")]
pub async fn upload_profile_picture_handler(
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    upload_image(ProfileImageKind::ProfilePicture, user, payload, data).await
}

/// Upload a banner
///
/// Field `banner`: jpg, jpeg, png or gif up to 5MB.
#[utoipa::path(
    post,
    path = "/api/users/banner",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body(content = BannerForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Stored; returns `{banner}`", body = serde_json::Value),
        (status = 400, description = "No file, wrong type or too large", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
    )
)]
#[post("/api/users/banner")]
pub async fn upload_banner_handler(
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    upload_image(ProfileImageKind::Banner, user, payload, data).await
}
