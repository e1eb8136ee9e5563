//! Query building for song listings.

use concat_string::concat_string;
use diesel::{PgTextExpressionMethods, QueryDsl};

use crate::orm::songs;
use crate::song::Filter;

fn contains(value: &str) -> String {
    concat_string!("%", value, "%")
}

/// Builds the listing query: an `AND` of case-insensitive "contains" predicates for every
/// non-empty filter field, ordered by id, with `LIMIT`/`OFFSET` only when positive.
pub fn filter(filter: &Filter) -> songs::BoxedQuery<'static, crate::orm::Type> {
    let mut query = songs::table.order_by(songs::id).into_boxed();

    if !filter.group.is_empty() {
        query = query.filter(songs::group.ilike(contains(&filter.group)));
    }
    if !filter.title.is_empty() {
        query = query.filter(songs::title.ilike(contains(&filter.title)));
    }
    if !filter.text.is_empty() {
        query = query.filter(songs::text.ilike(contains(&filter.text)));
    }

    if filter.limit > 0 {
        query = query.limit(filter.limit);
    }
    if filter.offset > 0 {
        query = query.offset(filter.offset);
    }

    query
}
