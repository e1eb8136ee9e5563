use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::database::Database;
use crate::integration::music_api;
use crate::repository;
use crate::service::Service;

#[derive(Clone)]
pub struct App {
    pub service: Service,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, color_eyre::Report> {
        let database = Database::new(&config.database)?;
        let repository = Arc::new(repository::Postgres::new(database));
        let enricher = Arc::new(music_api::Client::new(&config.music_api));
        Ok(Self { service: Service::new(repository, enricher) })
    }
}

impl FromRef<App> for Service {
    fn from_ref(input: &App) -> Self {
        input.service.clone()
    }
}
