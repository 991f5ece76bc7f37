use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_image_data_urls;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateHeadshotsDto {
    #[validate(
        length(min = 1, message = "at least one reference image is required."),
        custom = "validate_image_data_urls"
    )]
    pub image_data_urls: Vec<String>,
    #[validate]
    pub user_info: Option<UserInfoDto>,
    pub selected_pose: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoDto {
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120."))]
    pub age: Option<u16>,
    pub gender: Option<String>,
    pub job_role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> GenerateHeadshotsDto {
        GenerateHeadshotsDto {
            image_data_urls: vec!["data:image/png;base64,aGVsbG8=".to_string()],
            user_info: Some(UserInfoDto {
                age: Some(34),
                gender: Some("female".to_string()),
                job_role: Some("designer".to_string()),
            }),
            selected_pose: Some("front-formal".to_string()),
        }
    }

    #[test]
    fn accepts_a_valid_request() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn rejects_an_empty_image_list() {
        let mut dto = valid_dto();
        dto.image_data_urls = vec![];

        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_a_non_data_url_entry() {
        let mut dto = valid_dto();
        dto.image_data_urls
            .push("https://example.com/face.png".to_string());

        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_an_out_of_range_age() {
        let mut dto = valid_dto();
        dto.user_info = Some(UserInfoDto {
            age: Some(0),
            gender: None,
            job_role: None,
        });

        assert!(dto.validate().is_err());
    }

    #[test]
    fn deserializes_the_camel_case_wire_shape() {
        let dto: GenerateHeadshotsDto = serde_json::from_str(
            r#"{
                "imageDataUrls": ["data:image/png;base64,aGVsbG8="],
                "userInfo": { "age": 28, "gender": "male", "jobRole": "pm" },
                "selectedPose": "slight-angle"
            }"#,
        )
        .unwrap();

        assert_eq!(dto.image_data_urls.len(), 1);
        assert_eq!(dto.user_info.as_ref().unwrap().age, Some(28));
        assert_eq!(
            dto.user_info.as_ref().unwrap().job_role.as_deref(),
            Some("pm")
        );
        assert_eq!(dto.selected_pose.as_deref(), Some("slight-angle"));
    }
}
