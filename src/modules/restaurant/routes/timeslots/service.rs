use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context, utils::view};
use serde_json::json;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let (dates, timeslots) = tokio::join!(
        repository::find_timeslot_dates(
            &ctx.db_conn.pool,
            payload.rname.clone(),
            payload.raddress.clone(),
        ),
        repository::find_timeslots(
            &ctx.db_conn.pool,
            payload.rname.clone(),
            payload.raddress.clone(),
        ),
    );

    let back_to_profile = || response::Error::BackToProfile {
        rname: payload.rname.clone(),
        raddress: payload.raddress.clone(),
    };
    let dates = dates.map_err(|_| back_to_profile())?;
    let timeslots = timeslots.map_err(|_| back_to_profile())?;

    view::render(
        &ctx.templates,
        "timeslots",
        &json!({
            "title": format!("{} timeslots", payload.rname),
            "rname": payload.rname,
            "raddress": payload.raddress,
            "dates": dates,
            "timeslots": timeslots,
        }),
    )
    .map_err(|_| response::Error::FailedToRenderPage)
    .map(response::Success::Page)
}
