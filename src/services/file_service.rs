use crate::api::{ApiClient, FilePayload};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];
pub const ALLOWED_DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResult {
    pub url: String,
    pub filename: String,
    pub id: String,
    pub content_type: String,
    pub size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleFileUploadResult {
    pub files: Vec<FileUploadResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiUploadResponse {
    pub urls: Vec<String>,
}

/// Synthetic reference substituted when an upload fails, so admin forms stay
/// usable offline. Not durable: nothing is stored behind it.
pub fn placeholder_url(filename: &str) -> String {
    format!("/placeholder.svg?name={}", filename)
}

pub fn is_valid_type(content_type: &str, allowed: &[&str]) -> bool {
    allowed.contains(&content_type)
}

pub fn is_valid_size(size: usize, max: usize) -> bool {
    size <= max
}

/// Generic uploads outside the per-entity nested paths.
#[derive(Clone)]
pub struct FileUploadService {
    client: ApiClient,
}

impl FileUploadService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn upload(&self, file: &Path, category: &str) -> Result<FileUploadResult> {
        let payload = FilePayload::from_path(file).await?;
        let attempt = self
            .client
            .upload_file("/files/upload", "file", payload.clone(), &[("category", category)])
            .await;

        match attempt {
            Ok(result) => Ok(result),
            Err(e) if e.is_fallback_eligible() => {
                warn!(path = %file.display(), error = %e, "upload failed, substituting placeholder");
                Ok(placeholder_result(&payload))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn upload_many(
        &self,
        files: &[PathBuf],
        category: &str,
    ) -> Result<MultipleFileUploadResult> {
        let mut payloads = Vec::with_capacity(files.len());
        for file in files {
            payloads.push(FilePayload::from_path(file).await?);
        }

        let attempt = self
            .client
            .upload_files(
                "/files/upload-multiple",
                "files",
                payloads.clone(),
                &[("category", category)],
            )
            .await;

        match attempt {
            Ok(result) => Ok(result),
            Err(e) if e.is_fallback_eligible() => {
                warn!(count = files.len(), error = %e, "batch upload failed, substituting placeholders");
                Ok(MultipleFileUploadResult {
                    files: payloads.iter().map(placeholder_result).collect(),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// No fallback here: deleting a remote file has no local counterpart.
    pub async fn delete_file(&self, file_id: &str) -> Result<()> {
        self.client.delete(&format!("/files/{}", file_id)).await
    }

    /// Resolve a stored path against the API base URL; absolute URLs pass
    /// through untouched.
    pub fn file_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/files/{}", self.client.base_url(), path.trim_start_matches('/'))
    }
}

fn placeholder_result(payload: &FilePayload) -> FileUploadResult {
    FileUploadResult {
        url: placeholder_url(&payload.filename),
        filename: payload.filename.clone(),
        id: Uuid::new_v4().to_string(),
        content_type: payload.content_type.clone(),
        size: payload.data.len(),
    }
}

/// Entity-nested single upload with placeholder substitution on failure.
pub(crate) async fn upload_or_placeholder(
    client: &ApiClient,
    path: &str,
    field: &str,
    file: &Path,
) -> Result<UploadResponse> {
    let payload = FilePayload::from_path(file).await?;
    match client.upload_file(path, field, payload.clone(), &[]).await {
        Ok(response) => Ok(response),
        Err(e) if e.is_fallback_eligible() => {
            warn!(path, file = %file.display(), error = %e, "upload failed, substituting placeholder");
            Ok(UploadResponse {
                url: placeholder_url(&payload.filename),
            })
        }
        Err(e) => Err(e),
    }
}

/// Entity-nested batch upload with placeholder substitution on failure.
pub(crate) async fn upload_many_or_placeholder(
    client: &ApiClient,
    path: &str,
    field: &str,
    files: &[PathBuf],
) -> Result<MultiUploadResponse> {
    let mut payloads = Vec::with_capacity(files.len());
    for file in files {
        payloads.push(FilePayload::from_path(file).await?);
    }

    match client.upload_files(path, field, payloads.clone(), &[]).await {
        Ok(response) => Ok(response),
        Err(e) if e.is_fallback_eligible() => {
            warn!(path, count = files.len(), error = %e, "batch upload failed, substituting placeholders");
            Ok(MultiUploadResponse {
                urls: payloads.iter().map(|p| placeholder_url(&p.filename)).collect(),
            })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_type_validation() {
        assert!(is_valid_type("image/png", ALLOWED_IMAGE_TYPES));
        assert!(!is_valid_type("image/tiff", ALLOWED_IMAGE_TYPES));
        assert!(is_valid_size(MAX_IMAGE_SIZE, MAX_IMAGE_SIZE));
        assert!(!is_valid_size(MAX_IMAGE_SIZE + 1, MAX_IMAGE_SIZE));
    }

    #[test]
    fn placeholder_url_carries_filename() {
        assert_eq!(placeholder_url("cv.pdf"), "/placeholder.svg?name=cv.pdf");
    }
}
