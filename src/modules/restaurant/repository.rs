use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

use crate::utils::query::{self, FilterKey, PredicateTable};

/// Filter-to-predicate configuration for restaurant search. `pax` matches
/// slots with at least that many seats left, everything else is equality.
pub const SEARCH_PREDICATES: PredicateTable = PredicateTable::new(&[
    (FilterKey::Date, "date ="),
    (FilterKey::Time, "time ="),
    (FilterKey::Pax, "num_available >="),
    (FilterKey::Cuisine, "cuisine ="),
    (FilterKey::Rname, "rname ="),
]);

const SEARCH_BASE: &str =
    "SELECT DISTINCT rname, raddress, cuisine FROM restaurants NATURAL JOIN timeslots";

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct RestaurantSummary {
    pub rname: String,
    pub raddress: String,
    pub cuisine: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Restaurant {
    pub rname: String,
    pub raddress: String,
    pub cuisine: String,
    pub phone_number: String,
    pub opening_time: String,
    pub closing_time: String,
    pub owner_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItem {
    pub item_name: String,
    pub description: Option<String>,
    pub price: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Timeslot {
    pub rname: String,
    pub raddress: String,
    pub date: String,
    pub time: String,
    pub num_available: i32,
}

pub struct CreateRestaurantPayload {
    pub rname: String,
    pub raddress: String,
    pub cuisine: String,
    pub phone_number: String,
    pub opening_time: String,
    pub closing_time: String,
    pub owner_name: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    AlreadyExists,
    InvalidFilter(query::Error),
    InvalidPax,
}

pub async fn find_all_summaries<'e, E: PgExecutor<'e>>(
    e: E,
) -> Result<Vec<RestaurantSummary>, Error> {
    match sqlx::query_as::<_, RestaurantSummary>(
        "SELECT DISTINCT rname, raddress, cuisine FROM restaurants ORDER BY rname",
    )
    .fetch_all(e)
    .await
    {
        Ok(restaurants) => Ok(restaurants),
        Err(err) => {
            tracing::error!("Error occurred while trying to fetch restaurants: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

/// Searches restaurants with a WHERE clause assembled from the filter
/// entries. `pax` is bound as an integer, the rest bind as text.
pub async fn search_summaries<'e, E: PgExecutor<'e>>(
    e: E,
    filters: Vec<(FilterKey, String)>,
) -> Result<Vec<RestaurantSummary>, Error> {
    let built = query::build(SEARCH_BASE, filters, &SEARCH_PREDICATES, false)
        .map_err(Error::InvalidFilter)?;
    tracing::debug!("formed query: {} {:?}", built.text, built.values());

    let mut search = sqlx::query_as::<_, RestaurantSummary>(&built.text);
    for (key, value) in built.binds() {
        search = match key {
            FilterKey::Pax => search.bind(value.parse::<i32>().map_err(|_| Error::InvalidPax)?),
            _ => search.bind(value.clone()),
        };
    }

    match search.fetch_all(e).await {
        Ok(restaurants) => Ok(restaurants),
        Err(err) => {
            tracing::error!("Error occurred while trying to search restaurants: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<(), Error> {
    match sqlx::query(
        "
        INSERT INTO restaurants (
            rname,
            raddress,
            cuisine,
            phone_number,
            opening_time,
            closing_time,
            owner_name
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
    ",
    )
    .bind(payload.rname)
    .bind(payload.raddress)
    .bind(payload.cuisine)
    .bind(payload.phone_number)
    .bind(payload.opening_time)
    .bind(payload.closing_time)
    .bind(payload.owner_name)
    .execute(e)
    .await
    {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => Err(Error::AlreadyExists),
        Err(err) => {
            tracing::error!("Error occurred while trying to create a restaurant: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_by_natural_key<'e, E: PgExecutor<'e>>(
    e: E,
    rname: String,
    raddress: String,
) -> Result<Option<Restaurant>, Error> {
    match sqlx::query_as::<_, Restaurant>(
        "
            SELECT
                rname,
                raddress,
                cuisine,
                phone_number,
                opening_time,
                closing_time,
                owner_name,
                created_at
            FROM restaurants WHERE rname = $1 AND raddress = $2
        ",
    )
    .bind(rname)
    .bind(raddress)
    .fetch_optional(e)
    .await
    {
        Ok(maybe_restaurant) => Ok(maybe_restaurant),
        Err(err) => {
            tracing::error!("Error occurred while trying to fetch a restaurant: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_menus<'e, E: PgExecutor<'e>>(
    e: E,
    rname: String,
    raddress: String,
) -> Result<Vec<MenuItem>, Error> {
    match sqlx::query_as::<_, MenuItem>(
        "
            SELECT item_name, description, price
            FROM menus WHERE rname = $1 AND raddress = $2
            ORDER BY item_name
        ",
    )
    .bind(rname)
    .bind(raddress)
    .fetch_all(e)
    .await
    {
        Ok(menus) => Ok(menus),
        Err(err) => {
            tracing::error!("Error occurred while trying to fetch menus: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_timeslot_dates<'e, E: PgExecutor<'e>>(
    e: E,
    rname: String,
    raddress: String,
) -> Result<Vec<String>, Error> {
    match sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT date FROM timeslots WHERE rname = $1 AND raddress = $2 ORDER BY date",
    )
    .bind(rname)
    .bind(raddress)
    .fetch_all(e)
    .await
    {
        Ok(dates) => Ok(dates),
        Err(err) => {
            tracing::error!(
                "Error occurred while trying to fetch timeslot dates: {}",
                err
            );
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn find_timeslots<'e, E: PgExecutor<'e>>(
    e: E,
    rname: String,
    raddress: String,
) -> Result<Vec<Timeslot>, Error> {
    match sqlx::query_as::<_, Timeslot>(
        "
            SELECT rname, raddress, date, time, num_available
            FROM timeslots WHERE rname = $1 AND raddress = $2
            ORDER BY date, time
        ",
    )
    .bind(rname)
    .bind(raddress)
    .fetch_all(e)
    .await
    {
        Ok(timeslots) => Ok(timeslots),
        Err(err) => {
            tracing::error!("Error occurred while trying to fetch timeslots: {}", err);
            Err(Error::UnexpectedError)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn search_clause_matches_the_filter_order() {
        let built = query::build(
            SEARCH_BASE,
            vec![
                (FilterKey::Date, "2024-01-01".to_string()),
                (FilterKey::Pax, "4".to_string()),
            ],
            &SEARCH_PREDICATES,
            false,
        )
        .unwrap();

        assert_eq!(
            built.text,
            "SELECT DISTINCT rname, raddress, cuisine FROM restaurants NATURAL JOIN timeslots \
             WHERE date = $1 AND num_available >= $2"
        );
        assert_eq!(built.values(), vec!["2024-01-01", "4"]);
    }

    #[test]
    fn search_table_covers_every_search_filter() {
        for key in [
            FilterKey::Date,
            FilterKey::Time,
            FilterKey::Pax,
            FilterKey::Cuisine,
            FilterKey::Rname,
        ] {
            let built = query::build(
                SEARCH_BASE,
                vec![(key, "x".to_string())],
                &SEARCH_PREDICATES,
                false,
            );
            assert!(built.is_ok(), "search table misses {:?}", key);
        }
    }
}
