use song_library::config::Config;
use song_library::state::App;
use song_library::{build, init_tracing, migration, serve, shutdown_signal};

#[tokio::main]
async fn main() -> Result<(), color_eyre::Report> {
    let config = Config::new()?;
    init_tracing(&config.log)?;
    tracing::info!("{config:#?}");

    migration::run(&config.database).await?;

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    serve(
        listener,
        build(App::new(&config)?),
        shutdown_signal(),
        config.server.shutdown_grace_period(),
    )
    .await?;

    tracing::info!("server exited");
    Ok(())
}
