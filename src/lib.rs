#![deny(clippy::all)]

pub mod config;
pub mod database;
mod error;
pub mod integration;
pub mod migration;
mod orm;
pub mod repository;
mod route;
mod schema;
pub mod service;
pub mod song;
pub mod state;

use std::future::{Future, IntoFuture};
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
pub use error::Error;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[cfg(test)]
mod test;

pub fn build(state: state::App) -> Router {
    route::router().with_state(state).layer(ServiceBuilder::new().layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!("request", method = %request.method(), uri = %request.uri())
        }),
    ))
}

pub fn init_tracing(config: &config::Log) -> Result<(), color_eyre::Report> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        concat_string::concat_string!(env!("CARGO_CRATE_NAME"), "=info,tower_http=info").into()
    });

    let fmt = tracing_subscriber::fmt::layer().with_target(false);
    let fmt = match (config.format, config.time) {
        (config::log::Format::Plain, true) => fmt.boxed(),
        (config::log::Format::Plain, false) => fmt.without_time().boxed(),
        (config::log::Format::Json, true) => fmt.json().boxed(),
        (config::log::Format::Json, false) => fmt.json().without_time().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .with(tracing_error::ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Resolves on the first SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "could not listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Serves `router` until `shutdown` resolves, then gives in-flight requests `grace_period` to
/// complete before returning.
pub async fn serve(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
    grace_period: Duration,
) -> Result<(), std::io::Error> {
    let token = CancellationToken::new();
    let server = axum::serve(listener, router)
        .with_graceful_shutdown(token.clone().cancelled_owned())
        .into_future();

    let deadline = async {
        shutdown.await;
        tracing::info!(?grace_period, "shutting down");
        token.cancel();
        tokio::time::sleep(grace_period).await;
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            tracing::warn!("grace period elapsed, closing remaining connections");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    use super::*;

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (sender, receiver) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(
            listener,
            Router::new(),
            async {
                let _ = receiver.await;
            },
            Duration::from_secs(30),
        ));

        sender.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), server).await.unwrap().unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_serve_grace_period_is_bounded() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let (sender, receiver) = oneshot::channel::<()>();
        let router = Router::new().route("/", get(|| std::future::pending::<()>()));
        let server = tokio::spawn(serve(
            listener,
            router,
            async {
                let _ = receiver.await;
            },
            Duration::from_millis(100),
        ));

        let request = tokio::spawn(reqwest::get(format!("http://{address}/")));
        tokio::time::sleep(Duration::from_millis(50)).await;

        sender.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), server).await.unwrap().unwrap().unwrap();
        request.abort();
    }
}
