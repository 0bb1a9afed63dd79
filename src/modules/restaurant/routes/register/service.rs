use super::types::{request, response};
use crate::{modules::restaurant::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    if payload.fields.validate().is_err() {
        return Err(response::Error::InvalidFields);
    }

    let fields = payload.fields;
    match repository::create(
        &ctx.db_conn.pool,
        repository::CreateRestaurantPayload {
            rname: fields.name,
            raddress: fields.address,
            cuisine: fields.cuisine,
            phone_number: fields.phone_number,
            opening_time: fields.opening_time,
            closing_time: fields.closing_time,
            owner_name: fields.owner_name,
        },
    )
    .await
    {
        Ok(()) => Ok(response::Success::Registered),
        Err(repository::Error::AlreadyExists) => Err(response::Error::AlreadyRegistered),
        Err(_) => Err(response::Error::FailedToRegister),
    }
}
