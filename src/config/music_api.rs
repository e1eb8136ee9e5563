use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MusicApi {
    pub url: String,
}
