pub static API_URL: &str = "https://api.replicate.com/v1";
pub static MODEL: &str = "google/nano-banana-pro";
