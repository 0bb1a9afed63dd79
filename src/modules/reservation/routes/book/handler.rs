use super::{service::service, types::request};
use crate::{types::Context, utils};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use validator::Validate;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Query(fields): Query<request::Fields>,
) -> Response {
    if let Err(errors) = fields.validate() {
        return utils::validation::into_response(errors);
    }

    service(ctx, request::Payload { fields }).await.into_response()
}
