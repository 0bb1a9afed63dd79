pub mod request {
    pub struct Payload {
        pub rname: String,
        pub raddress: String,
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
        RestaurantNotFound,
        FailedToFetchMenus,
        FailedToRenderPage,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Restaurant not found" })),
                )
                    .into_response(),
                Self::FailedToFetchMenus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch menus" })),
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
