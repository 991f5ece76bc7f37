use crate::generations::{
    dtos::generate_headshots_dto::GenerateHeadshotsDto, enums::pose::Pose,
};

/// Light blue studio background (solid #D6EBFC, 512x512 png). Always sent as
/// image 1 so every generation shares the same backdrop reference.
pub static STUDIO_BACKGROUND_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAgAAAAIAAQMAAADOtka5AAAABlBMVEXW6/z///9J0xLFAAAACXBIWXMAAA7DAAAOwwHHb6hkAAAAGklEQVR4nO3BAQ0AAADCoPdPbQ43oAAAAACvBg4AAAH3GNIAAAAASUVORK5CYII=";

pub static DEFAULT_AGE: u16 = 30;
pub static DEFAULT_GENDER: &str = "male";
pub static DEFAULT_JOB_ROLE: &str = "developer";

/// Deterministic: the same request always encodes to the same prompt, and
/// unknown role/pose values fall back to the defaults above.
pub fn build_prompt(dto: &GenerateHeadshotsDto) -> String {
    let age = dto
        .user_info
        .as_ref()
        .and_then(|user_info| user_info.age)
        .unwrap_or(DEFAULT_AGE);
    let gender = dto
        .user_info
        .as_ref()
        .and_then(|user_info| user_info.gender.as_deref())
        .unwrap_or(DEFAULT_GENDER);
    let job_role = dto
        .user_info
        .as_ref()
        .and_then(|user_info| user_info.job_role.as_deref())
        .unwrap_or(DEFAULT_JOB_ROLE);

    let pose = dto
        .selected_pose
        .as_deref()
        .and_then(Pose::from_value)
        .unwrap_or(Pose::FrontFormal);

    format!(
        "Create a professional corporate headshot photograph.

IMAGE ROLES:
- Image 1 (first image): BACKGROUND REFERENCE - Use this exact light blue studio background color and style
- Images 2+ (remaining images): FACE/IDENTITY REFERENCE - Maintain exact facial features from these reference photos

SUBJECT DETAILS:
- {} {}
- Style: {}
- Pose: {}

REQUIREMENTS:
- Background MUST match the light blue color from the background reference image exactly
- Head perfectly straight and upright, not tilted
- Face directly facing the camera with direct eye contact
- Professional studio lighting with soft, even illumination
- Natural, confident expression with a subtle smile
- High-quality professional photography style
- Clean and minimalist composition
- Well-groomed, polished appearance appropriate for corporate use
- Maintain the exact facial features and identity from the face reference images

Do NOT include: watermarks, text overlays, dramatic shadows, patterned backgrounds, casual or unprofessional styling.",
        age_description(age),
        gender_term(gender),
        role_style(job_role),
        pose.prompt(),
    )
}

/// Background reference first, then the user's face references.
pub fn build_image_input(dto: &GenerateHeadshotsDto) -> Vec<String> {
    let mut image_input = Vec::with_capacity(dto.image_data_urls.len() + 1);
    image_input.push(STUDIO_BACKGROUND_DATA_URL.to_string());
    image_input.extend(dto.image_data_urls.iter().cloned());

    image_input
}

fn age_description(age: u16) -> &'static str {
    if age < 30 {
        "young professional"
    } else if age < 45 {
        "professional"
    } else {
        "experienced professional"
    }
}

fn gender_term(gender: &str) -> &'static str {
    match gender {
        "female" => "woman",
        _ => "man",
    }
}

fn role_style(job_role: &str) -> &'static str {
    match job_role {
        "developer" => "smart casual, modern tech professional style",
        "designer" => "creative professional, contemporary styling",
        "pm" => "business professional, polished appearance",
        "sales" => "business formal, confident presence",
        "education" => "approachable professional, warm demeanor",
        "marketing" => "modern professional, creative edge",
        "hr" => "professional friendly, welcoming appearance",
        "finance" => "business formal, conservative professional",
        _ => "smart casual, modern tech professional style",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generations::dtos::generate_headshots_dto::{GenerateHeadshotsDto, UserInfoDto};

    fn dto(
        age: Option<u16>,
        gender: Option<&str>,
        job_role: Option<&str>,
        pose: Option<&str>,
    ) -> GenerateHeadshotsDto {
        GenerateHeadshotsDto {
            image_data_urls: vec!["data:image/png;base64,aGVsbG8=".to_string()],
            user_info: Some(UserInfoDto {
                age,
                gender: gender.map(|gender| gender.to_string()),
                job_role: job_role.map(|job_role| job_role.to_string()),
            }),
            selected_pose: pose.map(|pose| pose.to_string()),
        }
    }

    #[test]
    fn same_request_encodes_to_the_same_prompt() {
        let a = dto(Some(38), Some("female"), Some("finance"), Some("arms-crossed"));
        let b = dto(Some(38), Some("female"), Some("finance"), Some("arms-crossed"));

        assert_eq!(build_prompt(&a), build_prompt(&b));
    }

    #[test]
    fn age_bands() {
        assert!(build_prompt(&dto(Some(29), None, None, None)).contains("- young professional man"));
        assert!(build_prompt(&dto(Some(30), None, None, None)).contains("- professional man"));
        assert!(build_prompt(&dto(Some(44), None, None, None)).contains("- professional man"));
        assert!(build_prompt(&dto(Some(45), None, None, None))
            .contains("- experienced professional man"));
    }

    #[test]
    fn gender_terms() {
        assert!(build_prompt(&dto(None, Some("female"), None, None)).contains("professional woman"));
        assert!(build_prompt(&dto(None, Some("male"), None, None)).contains("professional man"));
        assert!(build_prompt(&dto(None, None, None, None)).contains("professional man"));
    }

    #[test]
    fn unknown_role_and_pose_fall_back_to_defaults() {
        let prompt = build_prompt(&dto(None, None, Some("astronaut"), Some("moonwalk")));

        assert!(prompt.contains("smart casual, modern tech professional style"));
        assert!(prompt.contains("arms naturally at sides, shoulders square to camera"));
    }

    #[test]
    fn known_role_and_pose_are_encoded() {
        let prompt = build_prompt(&dto(None, None, Some("hr"), Some("hands-together")));

        assert!(prompt.contains("professional friendly, welcoming appearance"));
        assert!(prompt.contains("hands clasped together in front"));
    }

    #[test]
    fn missing_profile_uses_defaults() {
        let request = GenerateHeadshotsDto {
            image_data_urls: vec!["data:image/png;base64,aGVsbG8=".to_string()],
            user_info: None,
            selected_pose: None,
        };

        let prompt = build_prompt(&request);
        assert!(prompt.contains("- professional man"));
        assert!(prompt.contains("smart casual, modern tech professional style"));
    }

    #[test]
    fn image_input_leads_with_the_studio_background() {
        let request = dto(None, None, None, None);
        let image_input = build_image_input(&request);

        assert_eq!(image_input.len(), 2);
        assert_eq!(image_input[0], STUDIO_BACKGROUND_DATA_URL);
        assert_eq!(image_input[1], request.image_data_urls[0]);
    }
}
