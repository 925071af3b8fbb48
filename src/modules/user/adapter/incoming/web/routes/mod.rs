pub mod get_profile;
pub mod update_profile;
pub mod upload_profile_image;

pub use get_profile::get_profile_handler;
pub use update_profile::{update_profile_handler, UpdateProfileDto};
pub use upload_profile_image::{upload_banner_handler, upload_profile_picture_handler};
