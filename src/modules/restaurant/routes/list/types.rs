pub mod request {
    use crate::utils::query::FilterKey;
    use serde::Deserialize;

    /// Search filters from the query string. An absent parameter is not a
    /// filter; a present-but-blank one is dropped later by the builder.
    #[derive(Deserialize)]
    pub struct Filters {
        pub date: Option<String>,
        pub time: Option<String>,
        pub pax: Option<String>,
        pub cuisine: Option<String>,
        pub rname: Option<String>,
    }

    impl Filters {
        pub fn is_empty(&self) -> bool {
            self.date.is_none()
                && self.time.is_none()
                && self.pax.is_none()
                && self.cuisine.is_none()
                && self.rname.is_none()
        }

        pub fn into_entries(self) -> Vec<(FilterKey, String)> {
            [
                (FilterKey::Date, self.date),
                (FilterKey::Time, self.time),
                (FilterKey::Pax, self.pax),
                (FilterKey::Cuisine, self.cuisine),
                (FilterKey::Rname, self.rname),
            ]
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect()
        }
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use axum::{
        http::StatusCode,
        response::{Html, IntoResponse},
        Json,
    };
    use serde_json::json;

    pub enum Success {
        Page(Html<String>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Page(page) => (StatusCode::OK, page).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidFilters,
        FailedToFetchRestaurants,
        FailedToRenderPage,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidFilters => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid search filters" })),
                )
                    .into_response(),
                Self::FailedToFetchRestaurants => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch restaurants" })),
                )
                    .into_response(),
                Self::FailedToRenderPage => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to render page" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod test {
    use super::request::Filters;
    use crate::utils::query::FilterKey;

    #[test]
    fn entries_follow_declared_filter_order() {
        let filters = Filters {
            date: Some("2024-01-01".to_string()),
            time: None,
            pax: Some("4".to_string()),
            cuisine: None,
            rname: Some("Joe's".to_string()),
        };

        assert_eq!(
            filters.into_entries(),
            vec![
                (FilterKey::Date, "2024-01-01".to_string()),
                (FilterKey::Pax, "4".to_string()),
                (FilterKey::Rname, "Joe's".to_string()),
            ]
        );
    }

    #[test]
    fn blank_parameters_still_count_as_supplied() {
        let filters = Filters {
            date: None,
            time: None,
            pax: None,
            cuisine: Some(String::new()),
            rname: None,
        };

        assert!(!filters.is_empty());
        assert_eq!(
            filters.into_entries(),
            vec![(FilterKey::Cuisine, String::new())]
        );
    }
}
