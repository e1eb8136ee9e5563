use axum::extract::{RawQuery, State};
use axum::Json;
use serde::Deserialize;

use super::params;
use crate::service::Service;
use crate::song::{Filter, Song};
use crate::Error;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    group: Vec<String>,
    song: Vec<String>,
    text: Vec<String>,
    limit: Vec<String>,
    offset: Vec<String>,
}

impl From<Request> for Filter {
    fn from(value: Request) -> Self {
        let text = |values: &[String]| params::first(values).unwrap_or_default().to_owned();
        Self {
            group: text(&value.group),
            title: text(&value.song),
            text: text(&value.text),
            limit: params::parse(params::first(&value.limit)),
            offset: params::parse(params::first(&value.offset)),
        }
    }
}

#[utoipa::path(
    get,
    path = "/songs",
    tag = "songs",
    params(
        ("group" = Option<String>, Query, description = "Case-insensitive substring of the group"),
        ("song" = Option<String>, Query, description = "Case-insensitive substring of the title"),
        ("text" = Option<String>, Query, description = "Case-insensitive substring of the lyrics"),
        ("limit" = Option<i64>, Query, description = "Songs to return if positive"),
        ("offset" = Option<i64>, Query, description = "Songs to skip if positive"),
    ),
    responses(
        (status = 200, description = "Matching songs in storage order", body = Vec<Song>),
        (status = 500, description = "Internal server error", body = String),
    )
)]
pub async fn handler(
    State(service): State<Service>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Song>>, Error> {
    let request: Request = params::query(query.as_deref());
    service.get_songs(&request.into()).await.map(Json)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use fake::{Fake, Faker};
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::song::{Song, SongData};
    use crate::test::http::{request, to_json};
    use crate::test::{mock, Mock};

    #[rstest]
    #[tokio::test]
    async fn test_get_songs(mock: Mock) {
        let muse = mock.repository.insert(SongData::new("Muse", "Uprising"));
        mock.repository.insert(SongData::new("Queen", "Bohemian Rhapsody"));

        let response = mock
            .router()
            .oneshot(request(Method::GET, "/api/v1/songs?group=mUSE&song=rising"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(to_json::<Vec<Song>>(response).await, vec![muse]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_songs_text_filter(mock: Mock) {
        let song = mock
            .repository
            .insert(SongData { text: "Ooh baby, don't you know I suffer?".into(), ..Faker.fake() });
        mock.repository.insert(SongData { text: "Is this the real life?".into(), ..Faker.fake() });

        let response = mock
            .router()
            .oneshot(request(Method::GET, "/api/v1/songs?text=SUFFER"))
            .await
            .unwrap();
        assert_eq!(to_json::<Vec<Song>>(response).await, vec![song]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_songs_pagination(mock: Mock) {
        let songs: Vec<_> = (0..4).map(|_| mock.repository.insert(Faker.fake())).collect();

        let response = mock
            .router()
            .oneshot(request(Method::GET, "/api/v1/songs?limit=2&offset=1"))
            .await
            .unwrap();
        assert_eq!(to_json::<Vec<Song>>(response).await, songs[1..3].to_vec());
    }

    #[rstest]
    #[case("?limit=many&offset=-x", 0..3)]
    #[case("?limit=1&limit=2", 0..1)]
    #[case("?offset=2&offset=x&limit=5", 2..3)]
    #[tokio::test]
    async fn test_get_songs_lenient_window(
        mock: Mock,
        #[case] query: &str,
        #[case] expected: std::ops::Range<usize>,
    ) {
        let songs: Vec<_> = (0..3).map(|_| mock.repository.insert(Faker.fake())).collect();

        let response = mock
            .router()
            .oneshot(request(Method::GET, &format!("/api/v1/songs{query}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(to_json::<Vec<Song>>(response).await, songs[expected].to_vec());
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_songs_repeated_filter(mock: Mock) {
        let muse = mock.repository.insert(SongData::new("Muse", "Uprising"));
        mock.repository.insert(SongData::new("Queen", "Bohemian Rhapsody"));

        let response = mock
            .router()
            .oneshot(request(Method::GET, "/api/v1/songs?group=muse&group=queen"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(to_json::<Vec<Song>>(response).await, vec![muse]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_songs_empty(mock: Mock) {
        let response =
            mock.router().oneshot(request(Method::GET, "/api/v1/songs")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(to_json::<Vec<Song>>(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_songs_failure() {
        let response =
            Mock::failing().router().oneshot(request(Method::GET, "/api/v1/songs")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
