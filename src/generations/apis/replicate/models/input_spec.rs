use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    pub input: ModelInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelInput {
    pub prompt: String,
    pub image_input: Vec<String>,
    pub aspect_ratio: String,
    pub resolution: String,
    pub output_format: String,
    pub safety_filter_level: String,
}
