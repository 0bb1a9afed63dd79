use super::{service::service, types::request};
use crate::types::Context;
use axum::{extract::State, response::IntoResponse, Form};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Form(fields): Form<request::Fields>,
) -> impl IntoResponse {
    service(ctx, request::Payload { fields }).await
}
