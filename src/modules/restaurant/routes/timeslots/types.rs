pub mod request {
    pub struct Payload {
        pub rname: String,
        pub raddress: String,
    }
}

pub mod response {
    use axum::{
        http::StatusCode,
        response::{Html, IntoResponse, Redirect},
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
        /// Fetching the slots failed; send the diner back to the profile.
        BackToProfile { rname: String, raddress: String },
        FailedToRenderPage,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BackToProfile { rname, raddress } => Redirect::to(&format!(
                    "/restaurants/{}/{}",
                    urlencoding::encode(&rname),
                    urlencoding::encode(&raddress)
                ))
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
