use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request};
use axum::response::Response;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

pub async fn to_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn to_string(response: Response) -> String {
    String::from_utf8(to_bytes(response).await.to_vec()).unwrap()
}

pub async fn to_json<T: DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&to_bytes(response).await).unwrap()
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}
