use std::sync::Arc;

use crate::user::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileUseCase, UploadProfileImageUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub upload_image: Arc<dyn UploadProfileImageUseCase + Send + Sync>,
}
