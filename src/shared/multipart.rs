use actix_multipart::Multipart;
use futures::StreamExt;
use std::collections::HashMap;

use crate::shared::storage::{UploadPolicy, UploadedFile};

const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;
const MAX_TEXT_FIELDS: usize = 32;

/// Text fields and buffered files read from a `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MultipartError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Field '{field}' exceeds the {limit_mb}MB limit")]
    FieldTooLarge { field: String, limit_mb: usize },

    #[error("At most {0} files may be uploaded")]
    TooManyFiles(usize),

    #[error("At most {0} form fields are accepted")]
    TooManyFields(usize),
}

impl MultipartForm {
    /// Trimmed, non-empty text value of a field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn text_owned(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    /// Removes and returns every file posted under `field`.
    pub fn take_files(&mut self, field: &str) -> Vec<UploadedFile> {
        let (taken, rest) = std::mem::take(&mut self.files)
            .into_iter()
            .partition(|f| f.field_name == field);
        self.files = rest;
        taken
    }

    pub fn take_file(&mut self, field: &str) -> Option<UploadedFile> {
        self.take_files(field).into_iter().next()
    }
}

/// Drains the payload under `policy`. Size and count limits are enforced
/// while streaming, before the offending part is buffered.
pub async fn read_multipart(
    mut payload: Multipart,
    policy: &UploadPolicy,
) -> Result<MultipartForm, MultipartError> {
    let mut form = MultipartForm::default();
    let mut text_parts = 0usize;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| MultipartError::Malformed(e.to_string()))?;

        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|m| m.to_string());

        let limit = match &file_name {
            Some(original) if !original.is_empty() => {
                if form.files.len() >= policy.max_files {
                    return Err(MultipartError::TooManyFiles(policy.max_files));
                }
                policy.max_file_size_bytes
            }
            Some(_) => policy.max_file_size_bytes,
            None => {
                text_parts += 1;
                if text_parts > MAX_TEXT_FIELDS {
                    return Err(MultipartError::TooManyFields(MAX_TEXT_FIELDS));
                }
                MAX_TEXT_FIELD_BYTES
            }
        };

        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| MultipartError::Malformed(e.to_string()))?;
            if buf.len() + chunk.len() > limit {
                return Err(MultipartError::FieldTooLarge {
                    field: name,
                    limit_mb: (limit / (1024 * 1024)).max(1),
                });
            }
            buf.extend_from_slice(&chunk);
        }

        match file_name {
            Some(original_name) if !original_name.is_empty() => {
                form.files.push(UploadedFile {
                    field_name: name,
                    original_name,
                    content_type,
                    bytes: buf,
                });
            }
            // Browsers send an empty file part when no file was chosen
            Some(_) => {}
            None => {
                let value = String::from_utf8(buf)
                    .map_err(|_| MultipartError::Malformed(format!("field '{}' is not UTF-8", name)))?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::UploadDirectory;
    use crate::tests::support::multipart::MultipartBuilder;
    use actix_web::{http::StatusCode, post, test, App, HttpResponse};

    fn small_policy() -> UploadPolicy {
        UploadPolicy {
            max_file_size_bytes: 16,
            max_files: 3,
            allowed_extensions: UploadPolicy::IMAGE_EXTENSIONS,
            directory: UploadDirectory::References,
        }
    }

    #[post("/upload")]
    async fn upload(payload: Multipart) -> HttpResponse {
        match read_multipart(payload, &small_policy()).await {
            Ok(mut form) => {
                let files = form.take_files("references");
                HttpResponse::Ok().json(serde_json::json!({
                    "title": form.text("title"),
                    "blank": form.text("blank"),
                    "files": files.iter().map(|f| f.original_name.clone()).collect::<Vec<_>>(),
                    "sizes": files.iter().map(|f| f.len()).collect::<Vec<_>>(),
                }))
            }
            Err(MultipartError::FieldTooLarge { field, .. }) => {
                HttpResponse::BadRequest().body(field)
            }
            Err(e) => HttpResponse::BadRequest().body(e.to_string()),
        }
    }

    #[actix_web::test]
    async fn reads_text_fields_and_files() {
        let app = test::init_service(App::new().service(upload)).await;

        let (content_type, body) = MultipartBuilder::new()
            .text("title", "  Sketch  ")
            .text("blank", "   ")
            .file("references", "a.png", "image/png", b"1234")
            .file("references", "b.png", "image/png", b"56")
            .build();

        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["title"], "Sketch");
        assert!(json["blank"].is_null());
        assert_eq!(json["files"], serde_json::json!(["a.png", "b.png"]));
        assert_eq!(json["sizes"], serde_json::json!([4, 2]));
    }

    #[actix_web::test]
    async fn oversized_file_is_rejected_while_streaming() {
        let app = test::init_service(App::new().service(upload)).await;

        let (content_type, body) = MultipartBuilder::new()
            .file("references", "big.png", "image/png", &[0u8; 32])
            .build();

        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        assert_eq!(body, "references");
    }

    async fn post_form(content_type: String, body: Vec<u8>) -> (StatusCode, String) {
        let app = test::init_service(App::new().service(upload)).await;

        let req = test::TestRequest::post()
            .uri("/upload")
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn file_count_is_capped_while_streaming() {
        let mut builder = MultipartBuilder::new();
        for i in 0..200 {
            builder = builder.file("references", &format!("{i}.png"), "image/png", &[1u8; 4]);
        }
        let (content_type, body) = builder.build();

        let (status, message) = post_form(content_type, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "At most 3 files may be uploaded");
    }

    #[actix_web::test]
    async fn files_up_to_the_cap_are_accepted() {
        let (content_type, body) = MultipartBuilder::new()
            .file("references", "a.png", "image/png", b"1")
            .file("references", "b.png", "image/png", b"2")
            .file("references", "c.png", "image/png", b"3")
            // no file chosen
            .file("references", "", "application/octet-stream", b"")
            .build();

        let (status, _) = post_form(content_type, body).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn text_field_count_is_capped() {
        let mut builder = MultipartBuilder::new();
        for i in 0..=MAX_TEXT_FIELDS {
            builder = builder.text(&format!("field{i}"), "x");
        }
        let (content_type, body) = builder.build();

        let (status, message) = post_form(content_type, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, format!("At most {MAX_TEXT_FIELDS} form fields are accepted"));
    }
}
