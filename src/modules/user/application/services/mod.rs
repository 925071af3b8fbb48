mod get_profile_service;
mod update_profile_service;
mod upload_profile_image_service;

pub use get_profile_service::GetProfileService;
pub use update_profile_service::UpdateProfileService;
pub use upload_profile_image_service::UploadProfileImageService;
