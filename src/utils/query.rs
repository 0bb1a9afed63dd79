use itertools::Itertools;

/// The fixed vocabulary of filter names accepted from a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Date,
    Time,
    Pax,
    Cuisine,
    Rname,
    Raddr,
}

/// Immutable filter-key to SQL-fragment configuration, injected into `build`
/// by the repository that owns the use site.
pub struct PredicateTable {
    entries: &'static [(FilterKey, &'static str)],
}

impl PredicateTable {
    pub const fn new(entries: &'static [(FilterKey, &'static str)]) -> Self {
        Self { entries }
    }

    fn fragment(&self, key: FilterKey) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, fragment)| *fragment)
    }
}

/// A query assembled by `build`: the final SQL text plus the retained
/// filter values in emission order. The Nth bind pairs with placeholder `$N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub text: String,
    binds: Vec<(FilterKey, String)>,
}

impl BuiltQuery {
    pub fn binds(&self) -> &[(FilterKey, String)] {
        &self.binds
    }

    pub fn values(&self) -> Vec<&str> {
        self.binds.iter().map(|(_, value)| value.as_str()).collect()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UnsupportedFilter(FilterKey),
    NoPredicates,
}

/// Appends a parameterized WHERE clause to `base_prefix` from the filter
/// entries, one predicate per non-blank value, joined with AND. Placeholders
/// are numbered from `$1` in emission order, skipping blank entries, so the
/// numbering never has gaps. `limit_one` appends a trailing `LIMIT 1`.
///
/// An empty entry list returns `base_prefix` untouched. Entries whose value
/// is blank are dropped; if that leaves nothing, the call is refused with
/// `Error::NoPredicates` instead of issuing an unfiltered query. A key the
/// table does not cover is refused with `Error::UnsupportedFilter`.
pub fn build(
    base_prefix: &str,
    filters: Vec<(FilterKey, String)>,
    table: &PredicateTable,
    limit_one: bool,
) -> Result<BuiltQuery, Error> {
    if filters.is_empty() {
        return Ok(BuiltQuery {
            text: base_prefix.to_string(),
            binds: vec![],
        });
    }

    let retained = filters
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect::<Vec<_>>();

    if retained.is_empty() {
        return Err(Error::NoPredicates);
    }

    let conditions = retained
        .iter()
        .enumerate()
        .map(|(index, (key, _))| {
            table
                .fragment(*key)
                .map(|fragment| format!("{} ${}", fragment, index + 1))
                .ok_or(Error::UnsupportedFilter(*key))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut text = format!("{} WHERE {}", base_prefix, conditions.iter().join(" AND "));
    if limit_one {
        text.push_str(" LIMIT 1");
    }

    Ok(BuiltQuery {
        text,
        binds: retained,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    const TABLE: PredicateTable = PredicateTable::new(&[
        (FilterKey::Date, "date ="),
        (FilterKey::Time, "time ="),
        (FilterKey::Pax, "num_available >="),
        (FilterKey::Cuisine, "cuisine ="),
        (FilterKey::Rname, "rname ="),
    ]);

    const PREFIX: &str = "SELECT rname FROM restaurants";

    fn entries(pairs: &[(FilterKey, &str)]) -> Vec<(FilterKey, String)> {
        pairs
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }

    #[test]
    fn emits_one_predicate_per_entry_joined_with_and() {
        let built = build(
            PREFIX,
            entries(&[(FilterKey::Date, "2024-01-01"), (FilterKey::Pax, "4")]),
            &TABLE,
            false,
        )
        .unwrap();

        assert_eq!(
            built.text,
            "SELECT rname FROM restaurants WHERE date = $1 AND num_available >= $2"
        );
        assert_eq!(built.values(), vec!["2024-01-01", "4"]);
    }

    #[test]
    fn returns_prefix_unchanged_without_filters() {
        let built = build(PREFIX, vec![], &TABLE, false).unwrap();

        assert_eq!(built.text, PREFIX);
        assert!(built.values().is_empty());
    }

    #[test]
    fn drops_blank_values_and_renumbers_from_one() {
        let built = build(
            PREFIX,
            entries(&[(FilterKey::Cuisine, ""), (FilterKey::Rname, "Joe's")]),
            &TABLE,
            false,
        )
        .unwrap();

        assert_eq!(built.text, "SELECT rname FROM restaurants WHERE rname = $1");
        assert_eq!(built.values(), vec!["Joe's"]);
    }

    #[test]
    fn numbering_has_no_gaps_when_a_middle_value_is_blank() {
        let built = build(
            PREFIX,
            entries(&[
                (FilterKey::Date, "2024-01-01"),
                (FilterKey::Time, ""),
                (FilterKey::Cuisine, "Thai"),
            ]),
            &TABLE,
            false,
        )
        .unwrap();

        assert_eq!(
            built.text,
            "SELECT rname FROM restaurants WHERE date = $1 AND cuisine = $2"
        );
        assert_eq!(built.values(), vec!["2024-01-01", "Thai"]);
    }

    #[test]
    fn appends_trailing_limit_one() {
        let built = build(
            PREFIX,
            entries(&[(FilterKey::Rname, "Joe's")]),
            &TABLE,
            true,
        )
        .unwrap();

        assert_eq!(
            built.text,
            "SELECT rname FROM restaurants WHERE rname = $1 LIMIT 1"
        );
    }

    #[test]
    fn refuses_keys_the_table_does_not_cover() {
        let result = build(
            PREFIX,
            entries(&[(FilterKey::Raddr, "1 Main St")]),
            &TABLE,
            false,
        );

        assert_eq!(result, Err(Error::UnsupportedFilter(FilterKey::Raddr)));
    }

    #[test]
    fn refuses_filters_that_are_all_blank() {
        let result = build(
            PREFIX,
            entries(&[(FilterKey::Date, ""), (FilterKey::Time, "")]),
            &TABLE,
            false,
        );

        assert_eq!(result, Err(Error::NoPredicates));
    }

    #[test]
    fn binds_keep_their_keys_for_typed_binding() {
        let built = build(
            PREFIX,
            entries(&[(FilterKey::Pax, "2"), (FilterKey::Rname, "Joe's")]),
            &TABLE,
            false,
        )
        .unwrap();

        assert_eq!(
            built.binds(),
            &[
                (FilterKey::Pax, "2".to_string()),
                (FilterKey::Rname, "Joe's".to_string()),
            ]
        );
    }
}
