use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context, utils::view};
use serde_json::json;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fetched = if payload.filters.is_empty() {
        repository::find_all_summaries(&ctx.db_conn.pool).await
    } else {
        repository::search_summaries(&ctx.db_conn.pool, payload.filters.into_entries()).await
    };

    let restaurants = fetched.map_err(|err| match err {
        repository::Error::InvalidFilter(_) | repository::Error::InvalidPax => {
            response::Error::InvalidFilters
        }
        _ => response::Error::FailedToFetchRestaurants,
    })?;

    view::render(
        &ctx.templates,
        "restaurants",
        &json!({
            "title": "Restaurants",
            "restaurants": restaurants,
        }),
    )
    .map_err(|_| response::Error::FailedToRenderPage)
    .map(response::Success::Page)
}
