use crate::api::schemas::{
    BannerForm, CommissionUpdateForm, ErrorDetail, ErrorResponse, MessageResponse,
    ProfilePictureForm, SubmitRequestForm,
};
use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, RegisterRequestDto, ValidateTokenResponse,
};
use crate::auth::application::domain::entities::{AuthSession, UserInfo};

// Catalog
use crate::catalog::adapter::incoming::web::routes::CalculatePriceRequestDto;
use crate::catalog::application::domain::entities::{OptionSelection, Service, ServiceOption};
use crate::catalog::application::domain::pricing::{Complexity, PriceQuote};
use crate::catalog::application::domain::terms::{TermsOfService, TermsSection};

// Requests
use crate::request::adapter::incoming::web::routes::AcceptRequestDto;
use crate::request::application::domain::entities::{
    RequestCounts, RequestDetail, RequestStatus, RequestSummary,
};
use crate::request::application::ports::incoming::use_cases::{AcceptedRequest, SubmittedRequest};

// Commissions
use crate::commission::adapter::incoming::web::routes::{TagCommissionDto, UpdateCommissionDto};
use crate::commission::application::domain::entities::{
    CommissionSummary, CommissionUpdate, PendingRequest, Tag,
};
use crate::commission::application::domain::status::CommissionStatus;
use crate::commission::application::domain::views::{
    CommissionListItem, CommissionView, FullCommissionView, KanbanBoard, LimitedCommissionView,
    PublicCommissionSummary, PublicPendingRequest, QueueEntry,
};
use crate::commission::application::ports::incoming::use_cases::{AddedUpdate, CommissionState};

// Users
use crate::user::adapter::incoming::web::routes::UpdateProfileDto;
use crate::user::application::domain::entities::{ProfileCommission, ProfileOverview, UserProfile};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commission Tracker API",
        version = "1.0.0",
        description = "Art commission requests, pricing, progress tracking and the kanban board",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::validate_token::validate_token_handler,

        // User endpoints
        crate::user::adapter::incoming::web::routes::get_profile::get_profile_handler,
        crate::user::adapter::incoming::web::routes::update_profile::update_profile_handler,
        crate::user::adapter::incoming::web::routes::upload_profile_image::upload_profile_picture_handler,
        crate::user::adapter::incoming::web::routes::upload_profile_image::upload_banner_handler,

        // Catalog endpoints
        crate::catalog::adapter::incoming::web::routes::list_services::list_services_handler,
        crate::catalog::adapter::incoming::web::routes::get_service::get_service_handler,
        crate::catalog::adapter::incoming::web::routes::calculate_price::calculate_price_handler,
        crate::catalog::adapter::incoming::web::routes::terms_of_service::terms_of_service_handler,

        // Request endpoints
        crate::request::adapter::incoming::web::routes::submit_request::submit_request_handler,
        crate::request::adapter::incoming::web::routes::my_requests::my_requests_handler,
        crate::request::adapter::incoming::web::routes::get_request::get_request_handler,
        crate::request::adapter::incoming::web::routes::accept_request::accept_request_handler,

        // Commission endpoints
        crate::commission::adapter::incoming::web::routes::list_commissions::list_commissions_handler,
        crate::commission::adapter::incoming::web::routes::kanban::kanban_handler,
        crate::commission::adapter::incoming::web::routes::get_commission::get_commission_handler,
        crate::commission::adapter::incoming::web::routes::update_commission::update_commission_handler,
        crate::commission::adapter::incoming::web::routes::add_update::add_update_handler,
        crate::commission::adapter::incoming::web::routes::tag_commission::tag_commission_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            MessageResponse,

            // Forms
            SubmitRequestForm,
            CommissionUpdateForm,
            ProfilePictureForm,
            BannerForm,

            // Auth
            LoginRequestDto,
            RegisterRequestDto,
            ValidateTokenResponse,
            AuthSession,
            UserInfo,

            // Users
            UpdateProfileDto,
            UserProfile,
            ProfileCommission,
            ProfileOverview,

            // Catalog
            Service,
            ServiceOption,
            OptionSelection,
            CalculatePriceRequestDto,
            PriceQuote,
            Complexity,
            TermsOfService,
            TermsSection,

            // Requests
            AcceptRequestDto,
            AcceptedRequest,
            SubmittedRequest,
            RequestCounts,
            RequestStatus,
            RequestSummary,
            RequestDetail,

            // Commissions
            CommissionStatus,
            CommissionSummary,
            PublicCommissionSummary,
            CommissionListItem,
            PendingRequest,
            PublicPendingRequest,
            QueueEntry,
            KanbanBoard,
            FullCommissionView,
            LimitedCommissionView,
            CommissionView,
            CommissionUpdate,
            Tag,
            UpdateCommissionDto,
            CommissionState,
            TagCommissionDto,
            AddedUpdate,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token validation"),
        (name = "users", description = "Profile of the signed-in user"),
        (name = "services", description = "Service catalog, pricing and terms"),
        (name = "requests", description = "Commission requests"),
        (name = "commissions", description = "Commission tracking and the kanban board"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}

/// Serves the generated document for API clients and doc viewers.
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
