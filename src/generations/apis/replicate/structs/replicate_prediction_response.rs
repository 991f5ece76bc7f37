use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplicatePredictionResponse {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub logs: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

impl ReplicatePredictionResponse {
    /// Replicate returns either a single url or a list of urls depending on
    /// the model's output schema.
    pub fn output_urls(&self) -> Option<Vec<String>> {
        match &self.output {
            Some(Value::String(url)) => Some(vec![url.to_string()]),
            Some(Value::Array(values)) => Some(
                values
                    .iter()
                    .filter_map(|value| value.as_str().map(|url| url.to_string()))
                    .collect(),
            ),
            _ => None,
        }
    }
}
