use super::types::{request, response};
use crate::{
    modules::{reservation, restaurant::repository},
    types::Context,
    utils::view,
};
use serde_json::json;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let (restaurant, reviews) = tokio::join!(
        repository::find_by_natural_key(
            &ctx.db_conn.pool,
            payload.rname.clone(),
            payload.raddress.clone(),
        ),
        reservation::repository::find_recent_reviews(
            &ctx.db_conn.pool,
            payload.rname.clone(),
            payload.raddress.clone(),
        ),
    );

    let restaurant = restaurant
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;
    let reviews = reviews.map_err(|_| response::Error::FailedToFetchRestaurant)?;

    view::render(
        &ctx.templates,
        "restaurant",
        &json!({
            "title": restaurant.rname.clone(),
            "restaurant": restaurant,
            "reviews": reviews,
        }),
    )
    .map_err(|_| response::Error::FailedToRenderPage)
    .map(response::Success::Page)
}
