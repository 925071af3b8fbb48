// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "COMMISSION_NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Commission not found")]
    pub message: String,

    /// Extra machine-readable context, e.g. which registration fields clashed
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Profile updated successfully")]
    pub message: String,
}

// Multipart bodies. Documentation only; handlers read the stream directly.

/// `multipart/form-data` body of `POST /api/requests`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct SubmitRequestForm {
    #[schema(value_type = Option<String>, format = Uuid)]
    pub service_id: Option<String>,
    pub description: String,
    #[schema(example = 1)]
    pub character_count: Option<i32>,
    #[schema(example = 0)]
    pub alternative_count: Option<i32>,
    #[schema(example = 1)]
    pub pose_count: Option<i32>,
    pub is_nsfw: Option<bool>,
    /// JSON array of `{option_id, value}`
    #[schema(example = r#"[{"option_id":"6f1c2a9e-8d44-4c1e-9a59-2f9f3e0d8b11","value":2}]"#)]
    pub options: Option<String>,
    /// Required for anonymous callers
    pub username: Option<String>,
    /// Required for anonymous callers
    pub email: Option<String>,
    /// Required for anonymous callers
    pub password: Option<String>,
    /// Up to 10 images, 10MB each
    #[schema(value_type = Vec<String>, format = Binary)]
    pub references: Vec<Vec<u8>>,
}

/// `multipart/form-data` body of `POST /api/commissions/{id}/updates`
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CommissionUpdateForm {
    #[schema(example = "Line art done")]
    pub title: String,
    pub description: Option<String>,
    /// Image or mp4/webm video, 20MB max
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ProfilePictureForm {
    /// jpg, jpeg, png or gif, 5MB max
    #[schema(value_type = String, format = Binary)]
    pub profile_picture: Vec<u8>,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct BannerForm {
    /// jpg, jpeg, png or gif, 5MB max
    #[schema(value_type = String, format = Binary)]
    pub banner: Vec<u8>,
}
