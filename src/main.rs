pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, catalog, commission, email, request, user};

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::auth::application::services::{
    LoginUserService, RegisterUserService, ValidateTokenService,
};

use crate::catalog::adapter::outgoing::ServiceQueryPostgres;
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::services::{
    CalculatePriceService, GetServiceService, ListServicesService,
};

use crate::commission::adapter::outgoing::{CommissionQueryPostgres, CommissionRepositoryPostgres};
use crate::commission::application::commission_use_cases::CommissionUseCases;
use crate::commission::application::services::{
    AddUpdateService, GetCommissionService, GetKanbanService, ListCommissionsService,
    TagCommissionService, UpdateCommissionService,
};

use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::commission_notifier::CommissionNotifier;
use crate::email::application::ports::outgoing::email_sender::EmailSender;
use crate::email::application::services::EmailCommissionNotifier;

use crate::request::adapter::outgoing::{RequestQueryPostgres, RequestRepositoryPostgres};
use crate::request::application::request_use_cases::RequestUseCases;
use crate::request::application::services::{
    AcceptRequestService, GetRequestService, ListMyRequestsService, SubmitRequestService,
};

use crate::user::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use crate::user::application::services::{
    GetProfileService, UpdateProfileService, UploadProfileImageService,
};
use crate::user::application::user_use_cases::UserUseCases;

use crate::config::AppConfig;
use crate::shared::api::custom_json_config;
use crate::shared::storage::{FileStorage, LocalFileStorage};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub user: UserUseCases,
    pub catalog: CatalogUseCases,
    pub request: RequestUseCases,
    pub commission: CommissionUseCases,
    pub expose_error_details: bool,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = config.environment.as_str(), "Configuration loaded");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let db_arc = Arc::new(conn);

    // Shared adapters
    let tokens: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_config(config.argon2));

    let smtp_sender = SmtpEmailSender::from_config(&config.email)
        .map_err(anyhow::Error::msg)
        .context("Failed to build SMTP transport")?;
    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let notifier: Arc<dyn CommissionNotifier + Send + Sync> = Arc::new(
        EmailCommissionNotifier::new(email_sender, &config.email.operator_email),
    );

    let storage: Arc<dyn FileStorage + Send + Sync> =
        Arc::new(LocalFileStorage::new(config.upload_dir.clone()));

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));

    let register = Arc::new(RegisterUserService::new(
        user_query.clone(),
        user_repo,
        Arc::clone(&hasher),
        Arc::clone(&tokens),
    ));

    let auth = AuthUseCases {
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&tokens),
        )),
        register: register.clone(),
        validate: Arc::new(ValidateTokenService::new(user_query, Arc::clone(&tokens))),
    };

    // Catalog
    let service_query = ServiceQueryPostgres::new(Arc::clone(&db_arc));
    let get_service = Arc::new(GetServiceService::new(service_query.clone()));

    let catalog = CatalogUseCases {
        list: Arc::new(ListServicesService::new(service_query.clone())),
        get: get_service.clone(),
        calculate_price: Arc::new(CalculatePriceService::new(service_query)),
    };

    // Requests
    let request_query = RequestQueryPostgres::new(Arc::clone(&db_arc));
    let request_repo = RequestRepositoryPostgres::new(Arc::clone(&db_arc));

    let request = RequestUseCases {
        submit: Arc::new(SubmitRequestService::new(
            request_repo.clone(),
            get_service,
            register,
            Arc::clone(&storage),
            Arc::clone(&notifier),
        )),
        list_mine: Arc::new(ListMyRequestsService::new(request_query.clone())),
        get: Arc::new(GetRequestService::new(request_query.clone())),
        accept: Arc::new(AcceptRequestService::new(request_query, request_repo)),
    };

    // Commissions
    let commission_query = CommissionQueryPostgres::new(Arc::clone(&db_arc));
    let commission_repo = CommissionRepositoryPostgres::new(Arc::clone(&db_arc));

    let commission = CommissionUseCases {
        list: Arc::new(ListCommissionsService::new(commission_query.clone())),
        kanban: Arc::new(GetKanbanService::new(commission_query.clone())),
        get: Arc::new(GetCommissionService::new(commission_query.clone())),
        add_update: Arc::new(AddUpdateService::new(
            commission_query.clone(),
            commission_repo.clone(),
            Arc::clone(&storage),
            Arc::clone(&notifier),
        )),
        update: Arc::new(UpdateCommissionService::new(
            commission_query,
            commission_repo.clone(),
            Arc::clone(&notifier),
        )),
        tag: Arc::new(TagCommissionService::new(commission_repo)),
    };

    // Users
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));

    let user = UserUseCases {
        get_profile: Arc::new(GetProfileService::new(ProfileQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        update_profile: Arc::new(UpdateProfileService::new(profile_repo.clone())),
        upload_image: Arc::new(UploadProfileImageService::new(
            profile_repo,
            Arc::clone(&storage),
        )),
    };

    let state = AppState {
        auth,
        user,
        catalog,
        request,
        commission,
        expose_error_details: config.expose_error_details(),
    };

    let server_url = format!("{}:{}", config.host, config.port);
    let upload_dir = config.upload_dir.clone();
    info!(address = %server_url, upload_dir = %upload_dir, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&tokens)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(actix_files::Files::new("/uploads", upload_dir.clone()))
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server error")
}

/// Literal segments are registered before the `{id}` routes that would shadow them.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::validate_token_handler);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::upload_profile_picture_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::upload_banner_handler);
    // Catalog
    cfg.service(crate::catalog::adapter::incoming::web::routes::list_services_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::terms_of_service_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::calculate_price_handler);
    cfg.service(crate::catalog::adapter::incoming::web::routes::get_service_handler);
    // Requests
    cfg.service(crate::request::adapter::incoming::web::routes::submit_request_handler);
    cfg.service(crate::request::adapter::incoming::web::routes::my_requests_handler);
    cfg.service(crate::request::adapter::incoming::web::routes::get_request_handler);
    cfg.service(crate::request::adapter::incoming::web::routes::accept_request_handler);
    // Commissions
    cfg.service(crate::commission::adapter::incoming::web::routes::list_commissions_handler);
    cfg.service(crate::commission::adapter::incoming::web::routes::kanban_handler);
    cfg.service(crate::commission::adapter::incoming::web::routes::get_commission_handler);
    cfg.service(crate::commission::adapter::incoming::web::routes::update_commission_handler);
    cfg.service(crate::commission::adapter::incoming::web::routes::add_update_handler);
    cfg.service(crate::commission::adapter::incoming::web::routes::tag_commission_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        tracing::error!(error = ?e, "Application failed");
        eprintln!("Error starting app: {e:#}");
    }
}
