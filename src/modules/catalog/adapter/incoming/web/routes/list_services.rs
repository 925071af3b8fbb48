use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::catalog::application::domain::entities::Service;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List services
///
/// Active services ordered by name, each with its active options.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "services",
    responses(
        (status = 200, description = "Service catalogue", body = inline(SuccessResponse<Vec<Service>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/services")]
pub async fn list_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.catalog.list.execute().await {
        Ok(services) => ApiResponse::success(services),
        Err(e) => {
            error!(error = %e, "Failed to list services");
            ApiResponse::server_error(data.expose_error_details, &e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::application::ports::incoming::use_cases::{
        ListServicesError, ListServicesUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockListServices {
        result: Result<Vec<Service>, ListServicesError>,
    }

    #[async_trait]
    impl ListServicesUseCase for MockListServices {
        async fn execute(&self) -> Result<Vec<Service>, ListServicesError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn lists_services() {
        let state = TestAppStateBuilder::default()
            .with_list_services(MockListServices {
                result: Ok(vec![Service {
                    id: Uuid::new_v4(),
                    name: "Character Illustration".into(),
                    description: None,
                    base_price: 35.0,
                    options: vec![],
                }]),
            })
            .build();
        let app = test::init_service(App::new().app_data(state).service(list_services_handler))
            .await;

        let req = test::TestRequest::get().uri("/api/services").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["name"], "Character Illustration");
        assert_eq!(body["data"][0]["base_price"], 35.0);
    }

    #[actix_web::test]
    async fn query_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_list_services(MockListServices {
                result: Err(ListServicesError::QueryFailed("db down".into())),
            })
            .build();
        let app = test::init_service(App::new().app_data(state).service(list_services_handler))
            .await;

        let req = test::TestRequest::get().uri("/api/services").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
