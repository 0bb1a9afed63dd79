use crate::{
    modules::{reservation, restaurant},
    types::Context,
};
use axum::{routing::get, Router};
use std::sync::Arc;

async fn health_check() -> &'static str {
    "We up!"
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/restaurants", restaurant::get_router())
        .nest("/reservations", reservation::get_router())
}
