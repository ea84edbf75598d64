mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    // The browser bundle carries the same built-in values; log them so a
    // misconfigured build is visible from the server side too.
    let redirect = client::app::startup_config();
    tracing::info!(
        authorize_url = %redirect.authorize_url,
        client_id = %redirect.client_id,
        login_path = %redirect.login_path,
        "site b redirect target"
    );

    let app = routes::app(&config).expect("leptos configuration failed");
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "site-bridge listening");
    axum::serve(listener, app).await.expect("server failed");
}
