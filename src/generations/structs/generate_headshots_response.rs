use serde::Serialize;

/// Synchronous submissions answer with images, asynchronous ones with the
/// prediction id to poll.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHeadshotsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_id: Option<String>,
}
