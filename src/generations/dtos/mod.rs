use std::str::FromStr;

use regex::Regex;
use validator::ValidationError;

pub mod generate_headshots_dto;
pub mod get_generation_status_dto;

lazy_static! {
    pub static ref DATA_URL_REGEX: Regex =
        Regex::new(r"^data:([a-zA-Z0-9!#$&^_.+-]+/[a-zA-Z0-9!#$&^_.+-]+);base64,([A-Za-z0-9+/]+={0,2})$")
            .unwrap();
}

pub fn validate_image_data_urls(values: &Vec<String>) -> Result<(), ValidationError> {
    for value in values {
        validate_image_data_url(value)?;
    }

    Ok(())
}

fn validate_image_data_url(value: &str) -> Result<(), ValidationError> {
    let Some(captures) = DATA_URL_REGEX.captures(value) else {
        return Err(ValidationError::new("image_data_url_format"));
    };

    let Ok(mime_type) = mime::Mime::from_str(&captures[1]) else {
        return Err(ValidationError::new("image_data_url_mime"));
    };

    if mime_type.type_() != mime::IMAGE {
        return Err(ValidationError::new("image_data_url_mime"));
    }

    match base64::decode(&captures[2]) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("image_data_url_payload")),
    }
}
