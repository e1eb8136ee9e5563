pub mod verse;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A song as stored in the library and exposed over HTTP.
#[cfg_attr(test, derive(fake::Dummy))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    #[serde(flatten)]
    pub data: SongData,
}

/// Every song field except the server generated id.
#[cfg_attr(test, derive(fake::Dummy))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SongData {
    pub group: String,
    pub title: String,
    pub release_date: String,
    pub text: String,
    pub link: String,
}

/// The part of a song provided by the external metadata service.
#[cfg_attr(test, derive(fake::Dummy))]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub release_date: String,
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub group: String,
    pub title: String,
    pub text: String,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersePagination {
    pub song_id: i64,
    pub limit: i64,
    pub offset: i64,
}

impl SongData {
    pub fn new(group: impl Into<String>, title: impl Into<String>) -> Self {
        Self { group: group.into(), title: title.into(), ..Default::default() }
    }

    pub fn enrich(self, detail: Detail) -> Self {
        let Detail { release_date, text, link } = detail;
        Self { release_date, text, link, ..self }
    }
}
