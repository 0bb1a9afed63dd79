use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context, utils::view};
use serde_json::json;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_natural_key(
        &ctx.db_conn.pool,
        payload.rname.clone(),
        payload.raddress.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMenus)?
    .ok_or(response::Error::RestaurantNotFound)?;

    let menus = repository::find_menus(
        &ctx.db_conn.pool,
        payload.rname.clone(),
        payload.raddress.clone(),
    )
    .await
    .map_err(|_| response::Error::FailedToFetchMenus)?;

    view::render(
        &ctx.templates,
        "restaurant-menus",
        &json!({
            "title": format!("{} menus", payload.rname),
            "rname": payload.rname,
            "raddress": payload.raddress,
            "menus": menus,
        }),
    )
    .map_err(|_| response::Error::FailedToRenderPage)
    .map(response::Success::Page)
}
