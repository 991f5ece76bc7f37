use async_trait::async_trait;
use reqwest::header;

use crate::{
    app::{envy::Envy, errors::DefaultApiError, models::api_error::ApiError},
    generations::{
        enums::generation_job_status::GenerationJobStatus,
        errors::GenerationApiError,
        poller::{JobSnapshot, JobStatusSource},
    },
};

use super::{
    config::{API_URL, MODEL},
    models::input_spec::InputSpec,
    structs::{
        replicate_account_response::ReplicateAccountResponse,
        replicate_prediction_response::ReplicatePredictionResponse,
    },
};

/// Explicitly constructed provider client. Credentials come from config and
/// the client is shared through AppState, never a module global.
#[derive(Debug, Clone)]
pub struct ReplicateClient {
    http: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl ReplicateClient {
    pub fn new(envy: &Envy) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: envy.replicate_api_key.to_string(),
            api_url: envy
                .replicate_api_url
                .clone()
                .unwrap_or(API_URL.to_string()),
        }
    }

    fn headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert("Content-Type", "application/json".parse().unwrap());
        headers.insert(
            "Authorization",
            format!("Bearer {}", self.api_key).parse().unwrap(),
        );

        headers
    }

    pub async fn create_prediction(
        &self,
        input_spec: &InputSpec,
    ) -> Result<ReplicatePredictionResponse, ApiError> {
        let url = format!("{}/models/{}/predictions", self.api_url, MODEL);
        let result = self
            .http
            .post(url)
            .headers(self.headers())
            .json(input_spec)
            .send()
            .await;

        match result {
            Ok(res) => {
                let status = res.status();

                match res.text().await {
                    Ok(text) => {
                        if !status.is_success() {
                            tracing::warn!("create_prediction (1): {} {:?}", status, text);
                            return Err(GenerationApiError::SubmissionFailed.value());
                        }

                        match serde_json::from_str(&text) {
                            Ok(prediction) => Ok(prediction),
                            Err(_) => {
                                tracing::warn!("create_prediction (2): {:?}", text);
                                Err(DefaultApiError::InternalServerError.value())
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!("create_prediction (3): {:?}", e);
                        Err(DefaultApiError::InternalServerError.value())
                    }
                }
            }
            Err(e) => {
                tracing::warn!("create_prediction (4): {:?}", e);
                Err(GenerationApiError::SubmissionFailed.value())
            }
        }
    }

    pub async fn get_prediction(&self, id: &str) -> Result<ReplicatePredictionResponse, ApiError> {
        let url = format!("{}/predictions/{}", self.api_url, id);
        let result = self.http.get(url).headers(self.headers()).send().await;

        match result {
            Ok(res) => match res.text().await {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(prediction) => Ok(prediction),
                    Err(_) => {
                        tracing::warn!("get_prediction (1): {:?}", text);
                        Err(DefaultApiError::InternalServerError.value())
                    }
                },
                Err(e) => {
                    tracing::warn!("get_prediction (2): {:?}", e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            },
            Err(e) => {
                tracing::warn!("get_prediction (3): {:?}", e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }

    pub async fn get_account(&self) -> Result<ReplicateAccountResponse, ApiError> {
        let url = format!("{}/account", self.api_url);
        let result = self.http.get(url).headers(self.headers()).send().await;

        match result {
            Ok(res) => match res.text().await {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(account) => Ok(account),
                    Err(_) => {
                        tracing::warn!("get_account (1): {:?}", text);
                        Err(DefaultApiError::InternalServerError.value())
                    }
                },
                Err(e) => {
                    tracing::warn!("get_account (2): {:?}", e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            },
            Err(e) => {
                tracing::warn!("get_account (3): {:?}", e);
                Err(DefaultApiError::InternalServerError.value())
            }
        }
    }
}

#[async_trait]
impl JobStatusSource for ReplicateClient {
    async fn job_snapshot(&self, job_id: &str) -> Result<JobSnapshot, ApiError> {
        let prediction = self.get_prediction(job_id).await?;

        Ok(JobSnapshot {
            status: GenerationJobStatus::from_value(&prediction.status),
            images: prediction.output_urls(),
            error: prediction.error,
            progress: prediction.logs,
        })
    }
}
