use tokio::sync::watch;

use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::replicate::models::input_spec::{InputSpec, ModelInput},
    dtos::{
        generate_headshots_dto::GenerateHeadshotsDto,
        get_generation_status_dto::GetGenerationStatusDto,
    },
    errors::GenerationApiError,
    models::generation_job::GenerationJob,
    poller::{JobPoller, PollOutcome, PollSettings},
    structs::generate_headshots_response::GenerateHeadshotsResponse,
    util::prompt,
    DEFAULT_MAX_REFERENCE_IMAGES, DEFAULT_MAX_REFERENCE_IMAGE_BYTES,
};

pub async fn generate_headshots(
    dto: &GenerateHeadshotsDto,
    state: &AppState,
) -> Result<GenerateHeadshotsResponse, ApiError> {
    check_reference_image_bounds(dto, state)?;

    let input_spec = provide_input_spec(dto);

    let prediction = match state.replicate.create_prediction(&input_spec).await {
        Ok(prediction) => prediction,
        Err(e) => {
            tracing::error!("generate_headshots failed create_prediction");
            return Err(e);
        }
    };

    if !state.envy.sync_generations.unwrap_or(false) {
        return Ok(GenerateHeadshotsResponse {
            images: None,
            prediction_id: Some(prediction.id),
        });
    }

    let settings = PollSettings::from_envy(&state.envy);
    let poller = JobPoller::new(&state.replicate, settings);

    // The sender stays alive for the duration of the poll; the server never
    // cancels a submission it chose to await.
    let (_cancel_tx, cancel_rx) = watch::channel(false);

    match poller
        .poll(&prediction.id, cancel_rx, |progress| {
            tracing::debug!("generation {}: {}", prediction.id, progress);
        })
        .await
    {
        Ok(PollOutcome::Succeeded(images)) => Ok(GenerateHeadshotsResponse {
            images: Some(images),
            prediction_id: Some(prediction.id),
        }),
        // Unreachable while the server holds the only cancel sender, kept so
        // the match stays exhaustive without a panic path.
        Ok(PollOutcome::Canceled) => Err(ApiError {
            code: axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            message: "Image generation was canceled.".to_string(),
        }),
        Err(e) => {
            tracing::error!("generate_headshots failed poll: {:?}", e);
            Err(e.value())
        }
    }
}

pub async fn get_generation_status(
    dto: &GetGenerationStatusDto,
    state: &AppState,
) -> Result<GenerationJob, ApiError> {
    match state.replicate.get_prediction(&dto.id).await {
        Ok(prediction) => Ok(GenerationJob::from_prediction(&prediction)),
        Err(e) => {
            tracing::error!("get_generation_status failed get_prediction: {:?}", e);
            Err(ApiError {
                code: axum::http::StatusCode::BAD_GATEWAY,
                message: "Failed to check generation status.".to_string(),
            })
        }
    }
}

fn check_reference_image_bounds(
    dto: &GenerateHeadshotsDto,
    state: &AppState,
) -> Result<(), ApiError> {
    let max_images = state
        .envy
        .max_reference_images
        .unwrap_or(DEFAULT_MAX_REFERENCE_IMAGES);
    if dto.image_data_urls.len() > max_images {
        return Err(GenerationApiError::TooManyReferenceImages(max_images).value());
    }

    let max_bytes = state
        .envy
        .max_reference_image_bytes
        .unwrap_or(DEFAULT_MAX_REFERENCE_IMAGE_BYTES);
    for data_url in &dto.image_data_urls {
        if estimated_decoded_len(data_url) > max_bytes {
            return Err(GenerationApiError::ReferenceImageTooLarge(max_bytes).value());
        }
    }

    Ok(())
}

fn estimated_decoded_len(data_url: &str) -> usize {
    match data_url.split_once(";base64,") {
        Some((_, payload)) => payload.len() / 4 * 3,
        None => 0,
    }
}

fn provide_input_spec(dto: &GenerateHeadshotsDto) -> InputSpec {
    InputSpec {
        input: ModelInput {
            prompt: prompt::build_prompt(dto),
            image_input: prompt::build_image_input(dto),
            aspect_ratio: "1:1".to_string(),
            resolution: "2K".to_string(),
            output_format: "png".to_string(),
            safety_filter_level: "block_only_high".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{app::envy::Envy, generations::apis::replicate::client::ReplicateClient};

    fn test_state(
        max_reference_images: Option<usize>,
        max_reference_image_bytes: Option<usize>,
    ) -> AppState {
        let envy = Envy {
            app_env: "test".to_string(),
            port: None,
            replicate_api_key: "test-key".to_string(),
            replicate_api_url: None,
            sync_generations: None,
            max_reference_images,
            max_reference_image_bytes,
            poll_interval_ms: None,
            poll_max_attempts: None,
        };

        AppState {
            replicate: ReplicateClient::new(&envy),
            envy: Arc::new(envy),
        }
    }

    fn dto_with_images(count: usize) -> GenerateHeadshotsDto {
        GenerateHeadshotsDto {
            image_data_urls: (0..count)
                .map(|_| "data:image/png;base64,aGVsbG8=".to_string())
                .collect(),
            user_info: None,
            selected_pose: None,
        }
    }

    #[test]
    fn input_spec_carries_the_fixed_generation_parameters() {
        let input_spec = provide_input_spec(&dto_with_images(2));

        assert_eq!(input_spec.input.aspect_ratio, "1:1");
        assert_eq!(input_spec.input.resolution, "2K");
        assert_eq!(input_spec.input.output_format, "png");
        assert_eq!(input_spec.input.safety_filter_level, "block_only_high");
        // background reference + 2 face references
        assert_eq!(input_spec.input.image_input.len(), 3);
    }

    #[test]
    fn rejects_more_reference_images_than_configured() {
        let state = test_state(Some(2), None);

        let result = check_reference_image_bounds(&dto_with_images(3), &state);

        assert_eq!(
            result,
            Err(GenerationApiError::TooManyReferenceImages(2).value())
        );
    }

    #[test]
    fn accepts_a_reference_image_count_at_the_bound() {
        let state = test_state(Some(2), None);

        assert!(check_reference_image_bounds(&dto_with_images(2), &state).is_ok());
    }

    #[test]
    fn rejects_a_reference_image_over_the_byte_cap() {
        // "aGVsbG8=" estimates to 6 decoded bytes
        let state = test_state(None, Some(4));

        let result = check_reference_image_bounds(&dto_with_images(1), &state);

        assert_eq!(
            result,
            Err(GenerationApiError::ReferenceImageTooLarge(4).value())
        );
    }

    #[test]
    fn accepts_a_reference_image_within_the_byte_cap() {
        let state = test_state(None, Some(6));

        assert!(check_reference_image_bounds(&dto_with_images(1), &state).is_ok());
    }

    #[test]
    fn estimates_decoded_payload_size() {
        // "aGVsbG8=" decodes to "hello"
        assert_eq!(estimated_decoded_len("data:image/png;base64,aGVsbG8="), 6);
        assert_eq!(estimated_decoded_len("not a data url"), 0);
    }
}
