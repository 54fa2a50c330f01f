use crate::config::Config;
use crate::error::{Error, Result};
use crate::storage::{get_typed, LocalStore};
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Local store key holding the bearer token issued at login.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Local store key holding the admin-UI gate flag.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";

/// Thin wrapper around `reqwest` carrying the configured base URL and the
/// stored session token. Every other component issues its HTTP through here.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn LocalStore>,
}

impl ApiClient {
    pub fn new(config: &Config, store: Arc<dyn LocalStore>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<dyn LocalStore> {
        &self.store
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.http.get(self.url(path))).await?;
        Self::parse_json(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.http.post(self.url(path)).json(body))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.http.put(self.url(path)).json(body))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .execute(self.http.patch(self.url(path)).json(body))
            .await?;
        Self::parse_json(response).await
    }

    /// DELETE is a trivial success: the backend answers 204 with no body and
    /// there is nothing to parse.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    pub async fn upload_file<T: DeserializeOwned>(
        &self,
        path: &str,
        field_name: &str,
        file: FilePayload,
        extra: &[(&str, &str)],
    ) -> Result<T> {
        let mut form = Form::new().part(field_name.to_string(), file.into_part()?);
        for (key, value) in extra {
            form = form.text(key.to_string(), value.to_string());
        }
        self.send_multipart(path, form).await
    }

    pub async fn upload_files<T: DeserializeOwned>(
        &self,
        path: &str,
        field_name: &str,
        files: Vec<FilePayload>,
        extra: &[(&str, &str)],
    ) -> Result<T> {
        let mut form = Form::new();
        for file in files {
            form = form.part(field_name.to_string(), file.into_part()?);
        }
        for (key, value) in extra {
            form = form.text(key.to_string(), value.to_string());
        }
        self.send_multipart(path, form).await
    }

    async fn send_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let response = self
            .execute(self.http.request(Method::POST, self.url(path)).multipart(form))
            .await?;
        Self::parse_json(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_token(&self) -> Option<String> {
        get_typed::<String>(self.store.as_ref(), AUTH_TOKEN_KEY)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = match self.auth_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                info!("authorization rejected by backend, clearing stored session");
                self.store.remove(AUTH_TOKEN_KEY);
                self.store.remove(AUTH_FLAG_KEY);
            }
            let message = Self::error_message(response).await;
            warn!(status = status.as_u16(), reason = %message, "backend request failed");
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Prefer the server-supplied `message`/`error` body field, fall back to
    /// the status reason text.
    async fn error_message(response: reqwest::Response) -> String {
        let reason = response
            .status()
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();

        match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(reason),
            Err(_) => reason,
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let raw = response.text().await?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// In-memory file ready to be sent as a multipart part.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl FilePayload {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let data = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        let content_type = content_type_for(path).to_string();
        Ok(Self::new(filename, content_type, Bytes::from(data)))
    }

    fn into_part(self) -> Result<Part> {
        let part = Part::stream(self.data)
            .file_name(self.filename)
            .mime_str(&self.content_type)
            .map_err(|e| Error::Config(format!("Invalid content type: {}", e)))?;
        Ok(part)
    }
}

pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_matches_extension() {
        assert_eq!(content_type_for(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("diploma.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("blob")), "application/octet-stream");
    }
}
