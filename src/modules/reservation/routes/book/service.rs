use super::types::{request, response};
use crate::{modules::reservation::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fields = payload.fields;
    let num_diners = fields
        .pax
        .parse::<i32>()
        .map_err(|_| response::Error::InvalidPax)?;

    let slot = repository::find_slot_for_booking(&ctx.db_conn.pool, fields.lookup_entries())
        .await
        .map_err(|err| match err {
            repository::Error::InvalidFilter(_) => response::Error::InvalidFilters,
            _ => response::Error::FailedToBook,
        })?;

    let Some(slot) = slot else {
        return Ok(response::Success::SlotUnavailable);
    };

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateReservationPayload {
            rname: slot.rname,
            raddress: slot.raddress,
            date: slot.date,
            time: slot.time,
            diner_name: fields.diner,
            num_diners,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToBook)?;

    Ok(response::Success::Booked)
}
