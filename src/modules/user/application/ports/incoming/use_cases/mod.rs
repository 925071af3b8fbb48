pub mod get_profile;
pub mod update_profile;
pub mod upload_profile_image;

pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
};
pub use upload_profile_image::{
    UploadProfileImageCommand, UploadProfileImageError, UploadProfileImageUseCase, UploadedImage,
};
