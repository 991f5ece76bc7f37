use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{
        generate_headshots_dto::GenerateHeadshotsDto,
        get_generation_status_dto::GetGenerationStatusDto,
    },
    models::generation_job::GenerationJob,
    service,
    structs::generate_headshots_response::GenerateHeadshotsResponse,
};

pub async fn generate_headshots(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateHeadshotsDto>,
) -> Result<Json<GenerateHeadshotsResponse>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::generate_headshots(&dto, &state).await {
            Ok(response) => Ok(Json(response)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_generation_status(
    State(state): State<AppState>,
    Query(dto): Query<GetGenerationStatusDto>,
) -> Result<Json<GenerationJob>, ApiError> {
    match dto.validate() {
        Ok(_) => match service::get_generation_status(&dto, &state).await {
            Ok(job) => Ok(Json(job)),
            Err(e) => Err(e),
        },
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
