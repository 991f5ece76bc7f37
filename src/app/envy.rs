use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub replicate_api_key: String,
    pub replicate_api_url: Option<String>,

    /// When true, POST /generations blocks until the prediction reaches a
    /// terminal state and responds with the image urls directly.
    pub sync_generations: Option<bool>,

    pub max_reference_images: Option<usize>,
    pub max_reference_image_bytes: Option<usize>,

    pub poll_interval_ms: Option<u64>,
    pub poll_max_attempts: Option<u32>,
}
