//! Lenient parsing of path and query parameters: anything unparsable becomes `0`.

use std::str::FromStr;

use serde::de::DeserializeOwned;

pub fn parse<T: FromStr + Default>(value: Option<&str>) -> T {
    value.and_then(|value| value.trim().parse().ok()).unwrap_or_default()
}

/// Decodes a raw query string into `T`, whose fields are expected to be `Vec<String>` so that a
/// repeated key never fails the request.
pub fn query<T: DeserializeOwned + Default>(query: Option<&str>) -> T {
    query.map_or_else(T::default, |query| {
        serde_html_form::from_str(query).unwrap_or_else(|error| {
            tracing::warn!(%error, "could not decode query string");
            T::default()
        })
    })
}

/// The first value given for a key.
pub fn first(values: &[String]) -> Option<&str> {
    values.first().map(String::as_str)
}
