use serde::Serialize;

use crate::generations::{
    apis::replicate::structs::replicate_prediction_response::ReplicatePredictionResponse,
    enums::generation_job_status::GenerationJobStatus,
};

/// Client-facing view of a generation job. At most one of images, error and
/// progress is populated depending on where the job is in its lifecycle; a
/// succeeded prediction whose output is missing carries none of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationJob {
    pub id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<String>,
}

impl GenerationJob {
    pub fn from_prediction(prediction: &ReplicatePredictionResponse) -> Self {
        match GenerationJobStatus::from_value(&prediction.status) {
            Some(GenerationJobStatus::Succeeded) => Self {
                id: prediction.id.to_string(),
                status: GenerationJobStatus::Succeeded.value().to_string(),
                images: prediction.output_urls(),
                error: None,
                progress: None,
            },
            Some(GenerationJobStatus::Failed) => Self {
                id: prediction.id.to_string(),
                status: GenerationJobStatus::Failed.value().to_string(),
                images: None,
                error: Some(
                    prediction
                        .error
                        .clone()
                        .unwrap_or("Image generation failed.".to_string()),
                ),
                progress: None,
            },
            Some(GenerationJobStatus::Canceled) => Self {
                id: prediction.id.to_string(),
                status: GenerationJobStatus::Canceled.value().to_string(),
                images: None,
                error: Some("Image generation was canceled.".to_string()),
                progress: None,
            },
            // starting, queued, processing, or something newer
            _ => Self {
                id: prediction.id.to_string(),
                status: prediction.status.to_string(),
                images: None,
                error: None,
                progress: Some(
                    prediction
                        .logs
                        .clone()
                        .unwrap_or("Processing...".to_string()),
                ),
            },
        }
    }
}
