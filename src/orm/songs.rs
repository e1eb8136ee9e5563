use std::borrow::Cow;

use diesel::prelude::*;

pub use crate::schema::songs::{self, *};
use crate::song;

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Data<'a> {
    pub group: Cow<'a, str>,
    pub title: Cow<'a, str>,
    pub release_date: Cow<'a, str>,
    pub text: Cow<'a, str>,
    pub link: Cow<'a, str>,
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Song<'a> {
    pub id: i64,
    #[diesel(embed)]
    pub data: Data<'a>,
}

impl<'a> From<&'a song::SongData> for Data<'a> {
    fn from(value: &'a song::SongData) -> Self {
        Self {
            group: value.group.as_str().into(),
            title: value.title.as_str().into(),
            release_date: value.release_date.as_str().into(),
            text: value.text.as_str().into(),
            link: value.link.as_str().into(),
        }
    }
}

impl From<Data<'_>> for song::SongData {
    fn from(value: Data<'_>) -> Self {
        Self {
            group: value.group.into_owned(),
            title: value.title.into_owned(),
            release_date: value.release_date.into_owned(),
            text: value.text.into_owned(),
            link: value.link.into_owned(),
        }
    }
}

impl From<Song<'_>> for song::Song {
    fn from(value: Song<'_>) -> Self {
        Self { id: value.id, data: value.data.into() }
    }
}
