use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

use crate::modules::restaurant::repository::Timeslot;
use crate::utils::query::{self, FilterKey, PredicateTable};

/// Filter-to-predicate configuration for the booking slot lookup. `raddr`
/// is the query-string name for the `raddress` column.
pub const BOOKING_PREDICATES: PredicateTable = PredicateTable::new(&[
    (FilterKey::Date, "date ="),
    (FilterKey::Time, "time ="),
    (FilterKey::Rname, "rname ="),
    (FilterKey::Raddr, "raddress ="),
]);

const BOOKING_LOOKUP_BASE: &str =
    "SELECT rname, raddress, date, time, num_available FROM timeslots";

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Review {
    pub date: String,
    pub time: String,
    pub rating: Option<i32>,
    pub review: Option<String>,
}

pub struct CreateReservationPayload {
    pub rname: String,
    pub raddress: String,
    pub date: String,
    pub time: String,
    pub diner_name: Option<String>,
    pub num_diners: i32,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidFilter(query::Error),
}

/// Looks up the single timeslot matching the booking filters, if any.
pub async fn find_slot_for_booking<'e, E: PgExecutor<'e>>(
    e: E,
    filters: Vec<(FilterKey, String)>,
) -> Result<Option<Timeslot>, Error> {
    let built = query::build(BOOKING_LOOKUP_BASE, filters, &BOOKING_PREDICATES, true)
        .map_err(Error::InvalidFilter)?;
    tracing::debug!("formed query: {} {:?}", built.text, built.values());

    let mut lookup = sqlx::query_as::<_, Timeslot>(&built.text);
    for (_, value) in built.binds() {
        lookup = lookup.bind(value.clone());
    }

    match lookup.fetch_optional(e).await {
        Ok(maybe_slot) => Ok(maybe_slot),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to look up a booking slot: {}",
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateReservationPayload,
) -> Result<(), Error> {
    match sqlx::query(
        "
        INSERT INTO reservations (
            rname,
            raddress,
            date,
            time,
            diner_name,
            num_diners,
            rating,
            review
        )
        VALUES ($1, $2, $3, $4, $5, $6, NULL, NULL)
    ",
    )
    .bind(payload.rname)
    .bind(payload.raddress)
    .bind(payload.date)
    .bind(payload.time)
    .bind(payload.diner_name)
    .bind(payload.num_diners)
    .execute(e)
    .await
    {
        Ok(_) => Ok(()),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to create a reservation: {}",
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

/// The up-to-three earliest rated or reviewed reservations for a restaurant,
/// shown on its profile page.
pub async fn find_recent_reviews<'e, E: PgExecutor<'e>>(
    e: E,
    rname: String,
    raddress: String,
) -> Result<Vec<Review>, Error> {
    match sqlx::query_as::<_, Review>(
        "
            SELECT date, time, rating, review
            FROM reservations
            WHERE rname = $1 AND raddress = $2
                AND (rating IS NOT NULL OR review IS NOT NULL)
            ORDER BY date ASC, time ASC
            LIMIT 3
        ",
    )
    .bind(rname)
    .bind(raddress)
    .fetch_all(e)
    .await
    {
        Ok(reviews) => Ok(reviews),
        Err(err) => {
            tracing::error!("Error occurred while trying to fetch reviews: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn booking_lookup_ends_with_limit_one() {
        let built = query::build(
            BOOKING_LOOKUP_BASE,
            vec![
                (FilterKey::Date, "2024-02-02".to_string()),
                (FilterKey::Rname, "Joe's".to_string()),
                (FilterKey::Raddr, "1 Main St".to_string()),
            ],
            &BOOKING_PREDICATES,
            true,
        )
        .unwrap();

        assert!(built
            .text
            .ends_with("WHERE date = $1 AND rname = $2 AND raddress = $3 LIMIT 1"));
        assert_eq!(built.values(), vec!["2024-02-02", "Joe's", "1 Main St"]);
    }

    #[test]
    fn booking_table_rejects_search_only_filters() {
        for key in [FilterKey::Pax, FilterKey::Cuisine] {
            let result = query::build(
                BOOKING_LOOKUP_BASE,
                vec![(key, "x".to_string())],
                &BOOKING_PREDICATES,
                true,
            );
            assert_eq!(result, Err(query::Error::UnsupportedFilter(key)));
        }
    }
}
