use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationApiError {
    TooManyReferenceImages(usize),
    ReferenceImageTooLarge(usize),
    SubmissionFailed,
}

impl GenerationApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::TooManyReferenceImages(max) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!("A maximum of {} reference images is allowed.", max),
            },
            Self::ReferenceImageTooLarge(max_bytes) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!(
                    "Each reference image must be smaller than {} bytes.",
                    max_bytes
                ),
            },
            Self::SubmissionFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to submit generation request.".to_string(),
            },
        }
    }
}
