mod add_form;
mod list;
mod menus;
mod profile;
mod register;
mod timeslots;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(add_form::get_router())
        .merge(register::get_router())
        .merge(profile::get_router())
        .merge(menus::get_router())
        .merge(timeslots::get_router())
}
