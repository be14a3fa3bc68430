use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::domain::{
    common::{BackendConfig, entities::app_errors::CoreError},
    health::ports::BackendHealthCheck,
    ingredient::{
        entities::{AnalysisResult, ImageAnalysisResult},
        ports::AnalysisClient,
        value_objects::ImageUpload,
    },
};

/// reqwest client for the ingredient analysis backend.
///
/// No timeout is configured: a slow backend keeps the calling workflow in
/// `Sending` until it answers.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnalyzeTextRequest<'a> {
    ingredients: &'a str,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    message: String,
}

impl HttpAnalysisClient {
    pub fn new(config: &BackendConfig) -> Result<Self, CoreError> {
        Ok(Self {
            base_url: config.normalized_base_url()?,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, CoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Analysis backend error: {} - {}", status, body);
            return Err(CoreError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read analysis response: {}", e);
            CoreError::Network(e.to_string())
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to parse analysis response: {}", e);
            CoreError::ResponseParse(e.to_string())
        })
    }

    fn network_error(e: reqwest::Error) -> CoreError {
        tracing::error!("Analysis backend request failed: {}", e);
        CoreError::Network(e.to_string())
    }
}

impl AnalysisClient for HttpAnalysisClient {
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    async fn analyze_text(&self, text: String) -> Result<AnalysisResult, CoreError> {
        let response = self
            .client
            .post(self.endpoint("analyze"))
            .json(&AnalyzeTextRequest {
                ingredients: text.trim(),
            })
            .send()
            .await
            .map_err(Self::network_error)?;

        Self::read_json(response).await
    }

    #[instrument(skip_all, fields(file = %upload.file_name, bytes = upload.bytes.len()))]
    async fn analyze_image(&self, upload: ImageUpload) -> Result<ImageAnalysisResult, CoreError> {
        let part = Part::bytes(upload.bytes.to_vec())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|e| {
                CoreError::Validation(format!("Geçersiz dosya türü '{}': {}", upload.mime_type, e))
            })?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("analyze_image"))
            .multipart(form)
            .send()
            .await
            .map_err(Self::network_error)?;

        Self::read_json(response).await
    }
}

impl BackendHealthCheck for HttpAnalysisClient {
    async fn health(&self) -> Result<String, CoreError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(Self::network_error)?;

        let health: HealthResponse = Self::read_json(response).await?;
        Ok(health.message)
    }
}
