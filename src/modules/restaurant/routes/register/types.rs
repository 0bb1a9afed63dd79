pub mod request {
    use regex::Regex;
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{Validate, ValidationError};

    #[derive(Deserialize, Validate)]
    pub struct Fields {
        #[validate(length(min = 1, message = "Fields must not be blank!"))]
        pub name: String,
        #[validate(length(min = 1, message = "Fields must not be blank!"))]
        pub address: String,
        #[validate(length(min = 1, message = "Fields must not be blank!"))]
        pub cuisine: String,
        #[validate(length(min = 1, message = "Fields must not be blank!"))]
        pub phone_number: String,
        #[validate(custom(code = "INVALID_OPENING_TIME", function = "validate_opening_time"))]
        pub opening_time: String,
        #[validate(custom(code = "INVALID_CLOSING_TIME", function = "validate_closing_time"))]
        pub closing_time: String,
        #[validate(length(min = 1, message = "Fields must not be blank!"))]
        pub owner_name: String,
    }

    fn validate_opening_time(time_str: &str) -> Result<(), ValidationError> {
        let regex = Regex::new(r"^\d{2}:\d{2}$").expect("Invalid opening time regex");
        match regex.is_match(time_str) {
            true => Ok(()),
            false => Err(
                ValidationError::new("INVALID_OPENING_TIME").with_message(Cow::from(
                    r"Opening time must be in 24 hour format (e.g: 08:00)",
                )),
            ),
        }
    }

    fn validate_closing_time(time_str: &str) -> Result<(), ValidationError> {
        let regex = Regex::new(r"^\d{2}:\d{2}$").expect("Invalid closing time regex");
        match regex.is_match(time_str) {
            true => Ok(()),
            false => Err(
                ValidationError::new("INVALID_CLOSING_TIME").with_message(Cow::from(
                    r"Closing time must be in 24 hour format (e.g: 20:00)",
                )),
            ),
        }
    }

    pub struct Payload {
        pub fields: Fields,
    }
}

pub mod response {
    use axum::response::{IntoResponse, Redirect};

    const BLANK_FIELDS_NOTICE: &str = "Fields must not be blank!";
    const REGISTRATION_FAILED_NOTICE: &str =
        "Something went wrong; please try again. Perhaps your restaurant has been registered already?";

    fn back_to_form(notice: &str) -> Redirect {
        Redirect::to(&format!(
            "/restaurants/add?notice={}",
            urlencoding::encode(notice)
        ))
    }

    pub enum Success {
        Registered,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Registered => Redirect::to("/restaurants").into_response(),
            }
        }
    }

    pub enum Error {
        InvalidFields,
        AlreadyRegistered,
        FailedToRegister,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidFields => back_to_form(BLANK_FIELDS_NOTICE).into_response(),
                Self::AlreadyRegistered | Self::FailedToRegister => {
                    back_to_form(REGISTRATION_FAILED_NOTICE).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod test {
    use super::request::Fields;
    use validator::Validate;

    fn fields() -> Fields {
        Fields {
            name: "Joe's".to_string(),
            address: "1 Main St".to_string(),
            cuisine: "Thai".to_string(),
            phone_number: "65551234".to_string(),
            opening_time: "08:00".to_string(),
            closing_time: "22:00".to_string(),
            owner_name: "joe".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_registration() {
        assert!(fields().validate().is_ok());
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut blank_name = fields();
        blank_name.name = String::new();
        assert!(blank_name.validate().is_err());

        let mut blank_cuisine = fields();
        blank_cuisine.cuisine = String::new();
        assert!(blank_cuisine.validate().is_err());
    }

    #[test]
    fn rejects_malformed_opening_hours() {
        let mut bad_time = fields();
        bad_time.opening_time = "8am".to_string();
        assert!(bad_time.validate().is_err());

        let mut blank_time = fields();
        blank_time.closing_time = String::new();
        assert!(blank_time.validate().is_err());
    }
}
