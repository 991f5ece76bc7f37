use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct GetGenerationStatusDto {
    #[validate(length(min = 1, message = "id is required."))]
    pub id: String,
}
