pub mod request {
    use crate::utils::query::FilterKey;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Fields {
        #[validate(length(min = 1, message = "date is required"))]
        pub date: String,
        #[validate(length(min = 1, message = "time is required"))]
        pub time: String,
        #[validate(length(min = 1, message = "rname is required"))]
        pub rname: String,
        #[validate(length(min = 1, message = "raddr is required"))]
        pub raddr: String,
        #[validate(length(min = 1, message = "pax is required"))]
        pub pax: String,
        pub diner: Option<String>,
    }

    impl Fields {
        pub fn lookup_entries(&self) -> Vec<(FilterKey, String)> {
            vec![
                (FilterKey::Date, self.date.clone()),
                (FilterKey::Time, self.time.clone()),
                (FilterKey::Rname, self.rname.clone()),
                (FilterKey::Raddr, self.raddr.clone()),
            ]
        }
    }

    pub struct Payload {
        pub fields: Fields,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse, Json};
    use serde_json::json;

    pub enum Success {
        Booked,
        SlotUnavailable,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Booked => (StatusCode::OK, Json(json!(1))).into_response(),
                Self::SlotUnavailable => (StatusCode::OK, Json(json!(0))).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPax,
        InvalidFilters,
        FailedToBook,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidPax => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "pax must be a number" })),
                )
                    .into_response(),
                Self::InvalidFilters => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid booking filters" })),
                )
                    .into_response(),
                Self::FailedToBook => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to book reservation" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod test {
    use super::request::Fields;
    use crate::utils::query::FilterKey;
    use validator::Validate;

    fn fields() -> Fields {
        Fields {
            date: "2024-02-02".to_string(),
            time: "19:00".to_string(),
            rname: "Joe's".to_string(),
            raddr: "1 Main St".to_string(),
            pax: "2".to_string(),
            diner: None,
        }
    }

    #[test]
    fn lookup_entries_follow_declared_field_order() {
        assert_eq!(
            fields().lookup_entries(),
            vec![
                (FilterKey::Date, "2024-02-02".to_string()),
                (FilterKey::Time, "19:00".to_string()),
                (FilterKey::Rname, "Joe's".to_string()),
                (FilterKey::Raddr, "1 Main St".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_blank_booking_fields() {
        let mut blank_date = fields();
        blank_date.date = String::new();
        assert!(blank_date.validate().is_err());

        let mut blank_pax = fields();
        blank_pax.pax = String::new();
        assert!(blank_pax.validate().is_err());
    }
}
