pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Query {
        pub notice: Option<String>,
    }

    pub struct Payload {
        pub notice: Option<String>,
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
        FailedToRenderPage,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
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
