use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub username: Option<String>,
    pub description: Option<String>,
}

/// Update username and description
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<MessageResponse>)),
        (status = 400, description = "Username missing or taken", body = ErrorResponse),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
    )
)]
#[put("/api/users/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    body: web::Json<UpdateProfileDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();

    let command =
        match UpdateProfileCommand::new(UserId::from(user.user_id), dto.username, dto.description) {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.user.update_profile.execute(command).await {
        Ok(()) => ApiResponse::success(json!({ "message": "Profile updated successfully" })),
        Err(e @ UpdateProfileError::UsernameTaken) => {
            ApiResponse::bad_request("USERNAME_TAKEN", &e.to_string())
        }
        Err(UpdateProfileError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Failed to update profile");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}
