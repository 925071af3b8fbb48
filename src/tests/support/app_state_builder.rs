use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    LoginUserUseCase, RegisterUserUseCase, ValidateTokenUseCase,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::catalog::application::ports::incoming::use_cases::{
    CalculatePriceUseCase, GetServiceUseCase, ListServicesUseCase,
};
use crate::commission::application::commission_use_cases::CommissionUseCases;
use crate::commission::application::ports::incoming::use_cases::{
    AddUpdateUseCase, GetCommissionUseCase, GetKanbanUseCase, ListCommissionsUseCase,
    TagCommissionUseCase, UpdateCommissionUseCase,
};
use crate::request::application::ports::incoming::use_cases::{
    AcceptRequestUseCase, GetRequestUseCase, ListMyRequestsUseCase, SubmitRequestUseCase,
};
use crate::request::application::request_use_cases::RequestUseCases;
use crate::tests::support::stubs::*;
use crate::user::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileUseCase, UploadProfileImageUseCase,
};
use crate::user::application::user_use_cases::UserUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case defaults to a stub that panics when called; tests swap in
/// the ones their route exercises.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    user: UserUseCases,
    catalog: CatalogUseCases,
    request: RequestUseCases,
    commission: CommissionUseCases,
    expose_error_details: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginUserUseCase),
                register: Arc::new(StubRegisterUserUseCase),
                validate: Arc::new(StubValidateTokenUseCase),
            },
            user: UserUseCases {
                get_profile: Arc::new(StubGetProfileUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
                upload_image: Arc::new(StubUploadProfileImageUseCase),
            },
            catalog: CatalogUseCases {
                list: Arc::new(StubListServicesUseCase),
                get: Arc::new(StubGetServiceUseCase),
                calculate_price: Arc::new(StubCalculatePriceUseCase),
            },
            request: RequestUseCases {
                submit: Arc::new(StubSubmitRequestUseCase),
                list_mine: Arc::new(StubListMyRequestsUseCase),
                get: Arc::new(StubGetRequestUseCase),
                accept: Arc::new(StubAcceptRequestUseCase),
            },
            commission: CommissionUseCases {
                list: Arc::new(StubListCommissionsUseCase),
                kanban: Arc::new(StubGetKanbanUseCase),
                get: Arc::new(StubGetCommissionUseCase),
                add_update: Arc::new(StubAddUpdateUseCase),
                update: Arc::new(StubUpdateCommissionUseCase),
                tag: Arc::new(StubTagCommissionUseCase),
            },
            expose_error_details: true,
        }
    }
}

impl TestAppStateBuilder {
    // Auth
    pub fn with_login(mut self, uc: impl LoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_register(mut self, uc: impl RegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_validate_token(mut self, uc: impl ValidateTokenUseCase + 'static) -> Self {
        self.auth.validate = Arc::new(uc);
        self
    }

    // Users
    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.user.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(mut self, uc: impl UpdateProfileUseCase + 'static) -> Self {
        self.user.update_profile = Arc::new(uc);
        self
    }

    pub fn with_upload_profile_image(
        mut self,
        uc: impl UploadProfileImageUseCase + 'static,
    ) -> Self {
        self.user.upload_image = Arc::new(uc);
        self
    }

    // Catalog
    pub fn with_list_services(mut self, uc: impl ListServicesUseCase + 'static) -> Self {
        self.catalog.list = Arc::new(uc);
        self
    }

    pub fn with_get_service(mut self, uc: impl GetServiceUseCase + 'static) -> Self {
        self.catalog.get = Arc::new(uc);
        self
    }

    pub fn with_calculate_price(mut self, uc: impl CalculatePriceUseCase + 'static) -> Self {
        self.catalog.calculate_price = Arc::new(uc);
        self
    }

    // Requests
    pub fn with_submit_request(mut self, uc: impl SubmitRequestUseCase + 'static) -> Self {
        self.request.submit = Arc::new(uc);
        self
    }

    pub fn with_list_my_requests(mut self, uc: impl ListMyRequestsUseCase + 'static) -> Self {
        self.request.list_mine = Arc::new(uc);
        self
    }

    pub fn with_get_request(mut self, uc: impl GetRequestUseCase + 'static) -> Self {
        self.request.get = Arc::new(uc);
        self
    }

    pub fn with_accept_request(mut self, uc: impl AcceptRequestUseCase + 'static) -> Self {
        self.request.accept = Arc::new(uc);
        self
    }

    // Commissions
    pub fn with_list_commissions(mut self, uc: impl ListCommissionsUseCase + 'static) -> Self {
        self.commission.list = Arc::new(uc);
        self
    }

    pub fn with_get_kanban(mut self, uc: impl GetKanbanUseCase + 'static) -> Self {
        self.commission.kanban = Arc::new(uc);
        self
    }

    pub fn with_get_commission(mut self, uc: impl GetCommissionUseCase + 'static) -> Self {
        self.commission.get = Arc::new(uc);
        self
    }

    pub fn with_add_update(mut self, uc: impl AddUpdateUseCase + 'static) -> Self {
        self.commission.add_update = Arc::new(uc);
        self
    }

    pub fn with_update_commission(mut self, uc: impl UpdateCommissionUseCase + 'static) -> Self {
        self.commission.update = Arc::new(uc);
        self
    }

    pub fn with_tag_commission(mut self, uc: impl TagCommissionUseCase + 'static) -> Self {
        self.commission.tag = Arc::new(uc);
        self
    }

    pub fn hiding_error_details(mut self) -> Self {
        self.expose_error_details = false;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            user: self.user,
            catalog: self.catalog,
            request: self.request,
            commission: self.commission,
            expose_error_details: self.expose_error_details,
        })
    }
}
