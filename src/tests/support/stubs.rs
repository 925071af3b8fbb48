use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthSession, UserId, UserInfo};
use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginUserUseCase, RegisterCommand, RegisterError,
    RegisterUserUseCase, ValidateTokenError, ValidateTokenUseCase,
};

use crate::catalog::application::domain::entities::Service;
use crate::catalog::application::domain::pricing::PriceQuote;
use crate::catalog::application::ports::incoming::use_cases::{
    CalculatePriceCommand, CalculatePriceError, CalculatePriceUseCase, GetServiceError,
    GetServiceUseCase, ListServicesError, ListServicesUseCase,
};

use crate::request::application::domain::entities::{RequestDetail, RequestSummary};
use crate::request::application::ports::incoming::use_cases::{
    AcceptRequestCommand, AcceptRequestError, AcceptRequestUseCase, AcceptedRequest,
    GetRequestError, GetRequestUseCase, ListMyRequestsError, ListMyRequestsUseCase,
    SubmitRequestCommand, SubmitRequestError, SubmitRequestUseCase, SubmittedRequest,
};

use crate::commission::application::domain::entities::{Tag, Viewer};
use crate::commission::application::domain::status::CommissionStatus;
use crate::commission::application::domain::views::{
    CommissionListItem, CommissionView, KanbanBoard,
};
use crate::commission::application::ports::incoming::use_cases::{
    AddUpdateCommand, AddUpdateError, AddUpdateUseCase, AddedUpdate, CommissionState,
    GetCommissionError, GetCommissionUseCase, GetKanbanError, GetKanbanUseCase,
    ListCommissionsError, ListCommissionsUseCase, TagCommissionCommand, TagCommissionError,
    TagCommissionUseCase, UpdateCommissionCommand, UpdateCommissionError,
    UpdateCommissionUseCase,
};

use crate::user::application::domain::entities::ProfileOverview;
use crate::user::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, UpdateProfileCommand, UpdateProfileError,
    UpdateProfileUseCase, UploadProfileImageCommand, UploadProfileImageError,
    UploadProfileImageUseCase, UploadedImage,
};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(&self, _command: RegisterCommand) -> Result<AuthSession, RegisterError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubValidateTokenUseCase;

#[async_trait]
impl ValidateTokenUseCase for StubValidateTokenUseCase {
    async fn execute(&self, _token: &str) -> Result<UserInfo, ValidateTokenError> {
        unimplemented!("Not used in this test")
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubListServicesUseCase;

#[async_trait]
impl ListServicesUseCase for StubListServicesUseCase {
    async fn execute(&self) -> Result<Vec<Service>, ListServicesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetServiceUseCase;

#[async_trait]
impl GetServiceUseCase for StubGetServiceUseCase {
    async fn execute(&self, _service_id: Uuid) -> Result<Service, GetServiceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCalculatePriceUseCase;

#[async_trait]
impl CalculatePriceUseCase for StubCalculatePriceUseCase {
    async fn execute(
        &self,
        _command: CalculatePriceCommand,
    ) -> Result<PriceQuote, CalculatePriceError> {
        unimplemented!("Not used in this test")
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubSubmitRequestUseCase;

#[async_trait]
impl SubmitRequestUseCase for StubSubmitRequestUseCase {
    async fn execute(
        &self,
        _command: SubmitRequestCommand,
    ) -> Result<SubmittedRequest, SubmitRequestError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListMyRequestsUseCase;

#[async_trait]
impl ListMyRequestsUseCase for StubListMyRequestsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<RequestSummary>, ListMyRequestsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetRequestUseCase;

#[async_trait]
impl GetRequestUseCase for StubGetRequestUseCase {
    async fn execute(
        &self,
        _request_id: Uuid,
        _viewer: UserId,
    ) -> Result<RequestDetail, GetRequestError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAcceptRequestUseCase;

#[async_trait]
impl AcceptRequestUseCase for StubAcceptRequestUseCase {
    async fn execute(
        &self,
        _command: AcceptRequestCommand,
    ) -> Result<AcceptedRequest, AcceptRequestError> {
        unimplemented!("Not used in this test")
    }
}

// ---------------------------------------------------------------------------
// Commissions
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubListCommissionsUseCase;

#[async_trait]
impl ListCommissionsUseCase for StubListCommissionsUseCase {
    async fn execute(
        &self,
        _viewer: Viewer,
        _status: Option<CommissionStatus>,
    ) -> Result<Vec<CommissionListItem>, ListCommissionsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetKanbanUseCase;

#[async_trait]
impl GetKanbanUseCase for StubGetKanbanUseCase {
    async fn execute(&self, _viewer: Viewer) -> Result<KanbanBoard, GetKanbanError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCommissionUseCase;

#[async_trait]
impl GetCommissionUseCase for StubGetCommissionUseCase {
    async fn execute(
        &self,
        _commission_id: Uuid,
        _viewer: Viewer,
    ) -> Result<CommissionView, GetCommissionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddUpdateUseCase;

#[async_trait]
impl AddUpdateUseCase for StubAddUpdateUseCase {
    async fn execute(&self, _command: AddUpdateCommand) -> Result<AddedUpdate, AddUpdateError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCommissionUseCase;

#[async_trait]
impl UpdateCommissionUseCase for StubUpdateCommissionUseCase {
    async fn execute(
        &self,
        _command: UpdateCommissionCommand,
    ) -> Result<CommissionState, UpdateCommissionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubTagCommissionUseCase;

#[async_trait]
impl TagCommissionUseCase for StubTagCommissionUseCase {
    async fn execute(&self, _command: TagCommissionCommand) -> Result<Tag, TagCommissionError> {
        unimplemented!("Not used in this test")
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<ProfileOverview, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(&self, _command: UpdateProfileCommand) -> Result<(), UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadProfileImageUseCase;

#[async_trait]
impl UploadProfileImageUseCase for StubUploadProfileImageUseCase {
    async fn execute(
        &self,
        _command: UploadProfileImageCommand,
    ) -> Result<UploadedImage, UploadProfileImageError> {
        unimplemented!("Not used in this test")
    }
}
