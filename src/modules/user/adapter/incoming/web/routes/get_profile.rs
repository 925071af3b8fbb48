use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::domain::entities::ProfileOverview;
use crate::user::application::ports::incoming::use_cases::GetProfileError;
use crate::AppState;

/// Current user's profile
///
/// Returns the profile together with the caller's commissions.
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile and commissions", body = inline(SuccessResponse<ProfileOverview>)),
        (status = 401, description = "Missing token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/profile")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .user
        .get_profile
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(overview) => ApiResponse::success(overview),
        Err(GetProfileError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(e) => {
            error!(error = %e, user_id = %user.user_id, "Failed to load profile");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::application::domain::status::CommissionStatus;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, StubTokenProvider};
    use crate::user::application::ports::incoming::use_cases::GetProfileUseCase;
    use crate::user::application::services::test_fixtures::{profile, profile_commission};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockGetProfile {
        missing: bool,
    }

    #[async_trait]
    impl GetProfileUseCase for MockGetProfile {
        async fn execute(&self, user_id: UserId) -> Result<ProfileOverview, GetProfileError> {
            if self.missing {
                return Err(GetProfileError::NotFound);
            }
            Ok(ProfileOverview {
                user: profile(user_id),
                commissions: vec![profile_commission(CommissionStatus::Accepted)],
            })
        }
    }

    macro_rules! app {
        ($uc:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_get_profile($uc).build())
                    .app_data(StubTokenProvider::client().into_app_data())
                    .service(get_profile_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn returns_profile_and_commissions() {
        let app = app!(MockGetProfile { missing: false });

        let req = test::TestRequest::get()
            .uri("/api/users/profile")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["username"], "client");
        assert_eq!(body["data"]["commissions"][0]["status"], "Accepted");
        assert_eq!(
            body["data"]["commissions"][0]["latest_update"],
            "/uploads/commissions/sketch.png"
        );
    }

    #[actix_web::test]
    async fn requires_token() {
        let app = app!(MockGetProfile { missing: false });

        let req = test::TestRequest::get().uri("/api/users/profile").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn deleted_user_is_404() {
        let app = app!(MockGetProfile { missing: true });

        let req = test::TestRequest::get()
            .uri("/api/users/profile")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }

    struct FailingGetProfile;

    #[async_trait]
    impl GetProfileUseCase for FailingGetProfile {
        async fn execute(&self, _user_id: UserId) -> Result<ProfileOverview, GetProfileError> {
            Err(GetProfileError::QueryFailed("connection reset".into()))
        }
    }

    #[actix_web::test]
    async fn query_failure_hides_details_in_production() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_get_profile(FailingGetProfile)
                        .hiding_error_details()
                        .build(),
                )
                .app_data(StubTokenProvider::client().into_app_data())
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/profile")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(body["error"]["details"].is_null());
    }
}
