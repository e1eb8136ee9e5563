pub mod songs;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::App;

pub const BASE_PATH: &str = "/api/v1";
pub const DOCS_PATH: &str = "/swagger";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

pub fn router() -> Router<App> {
    Router::new()
        .nest(BASE_PATH, songs::router())
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, songs::Api::openapi()))
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use rstest::rstest;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::test::http::{request, to_json};
    use crate::test::{mock, Mock};

    #[rstest]
    #[tokio::test]
    async fn test_openapi_document(mock: Mock) {
        let response = mock.router().oneshot(request(Method::GET, OPENAPI_PATH)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let document: Value = to_json(response).await;
        assert_eq!(document["servers"][0]["url"], BASE_PATH);

        let paths = &document["paths"];
        for (path, method) in [
            ("/songs", "get"),
            ("/songs", "post"),
            ("/songs/{id}", "put"),
            ("/songs/{id}", "delete"),
            ("/songs/{id}/verses", "get"),
        ] {
            assert!(paths[path][method].is_object(), "{method} {path} is not documented");
        }

        let song = &document["components"]["schemas"]["Song"];
        assert!(song.is_object());
    }

    #[rstest]
    #[tokio::test]
    async fn test_swagger_ui(mock: Mock) {
        let response = mock
            .router()
            .oneshot(request(Method::GET, &format!("{DOCS_PATH}/")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
