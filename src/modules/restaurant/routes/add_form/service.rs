use super::types::{request, response};
use crate::{types::Context, utils::view};
use serde_json::json;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    view::render(
        &ctx.templates,
        "add-restaurant",
        &json!({
            "title": "Register your restaurant",
            "notice": payload.notice,
        }),
    )
    .map_err(|_| response::Error::FailedToRenderPage)
    .map(response::Success::Page)
}
