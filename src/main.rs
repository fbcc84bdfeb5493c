use holonet::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;
    let app = router::app(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.address()).await?;

    tracing::info!(address = %config.address(), "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
