use actix_web::{http::StatusCode, post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::ports::incoming::use_cases::{RegisterCommand, RegisterError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    #[schema(example = "johndoe")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "john@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    #[serde(default)]
    pub password: String,
}

/// Map a registration failure to its HTTP response.
pub fn register_error_response(err: RegisterError, expose_details: bool) -> actix_web::HttpResponse {
    match err {
        RegisterError::UserAlreadyExists {
            is_email_taken,
            is_username_taken,
        } => {
            warn!(is_email_taken, is_username_taken, "Registration conflict");
            ApiResponse::error_with_details(
                StatusCode::BAD_REQUEST,
                "USER_ALREADY_EXISTS",
                "Username or email already exists",
                Some(serde_json::json!({
                    "is_email_taken": is_email_taken,
                    "is_username_taken": is_username_taken,
                })),
            )
        }
        e => {
            error!(error = %e, "Registration failed");
            ApiResponse::server_error(expose_details, &e.to_string())
        }
    }
}

/// Register a new account
///
/// Creates the account and returns a session token so the client is logged in at once.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSession>)),
        (
            status = 400,
            description = "Invalid input or username/email taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_ALREADY_EXISTS",
                    "message": "Username or email already exists",
                    "details": { "is_email_taken": true, "is_username_taken": false }
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterCommand::new(dto.username, dto.email, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.register.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "Account created");
            ApiResponse::created(session)
        }
        Err(e) => register_error_response(e, data.expose_error_details),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserInfo;
    use crate::auth::application::ports::incoming::use_cases::RegisterUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct MockRegisterUser {
        result: Result<AuthSession, RegisterError>,
    }

    #[async_trait]
    impl RegisterUserUseCase for MockRegisterUser {
        async fn execute(&self, _command: RegisterCommand) -> Result<AuthSession, RegisterError> {
            self.result.clone()
        }
    }

    async fn post_register(
        result: Result<AuthSession, RegisterError>,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_register(MockRegisterUser { result })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "username": "newbie",
            "email": "newbie@example.com",
            "password": "pw"
        })
    }

    #[actix_web::test]
    async fn test_register_success_returns_created_with_token() {
        let session = AuthSession {
            token: "fresh".to_string(),
            user: UserInfo {
                id: Uuid::new_v4(),
                username: "newbie".to_string(),
                email: "newbie@example.com".to_string(),
                is_vip: false,
                is_operator: false,
            },
        };

        let (status, body) = post_register(Ok(session), valid_body()).await;

        assert_eq!(status, 201);
        assert_eq!(body["data"]["token"], "fresh");
        assert_eq!(body["data"]["user"]["username"], "newbie");
    }

    #[actix_web::test]
    async fn test_register_conflict_reports_fields() {
        let (status, body) = post_register(
            Err(RegisterError::UserAlreadyExists {
                is_email_taken: false,
                is_username_taken: true,
            }),
            valid_body(),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "USER_ALREADY_EXISTS");
        assert_eq!(body["error"]["details"]["is_username_taken"], true);
        assert_eq!(body["error"]["details"]["is_email_taken"], false);
    }

    #[actix_web::test]
    async fn test_register_invalid_email() {
        let (status, body) = post_register(
            Err(RegisterError::HashingFailed("unused".into())),
            serde_json::json!({ "username": "a", "email": "nope", "password": "pw" }),
        )
        .await;

        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_register_missing_fields() {
        let (status, _) = post_register(
            Err(RegisterError::HashingFailed("unused".into())),
            serde_json::json!({ "username": "a" }),
        )
        .await;

        assert_eq!(status, 400);
    }
}
