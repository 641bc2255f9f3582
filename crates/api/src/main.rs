#[tokio::main]
async fn main() {
    vibe_observability::init();

    let services = vibe_api::app::services::AppServices::from_env();
    let frontend_url = std::env::var("FRONTEND_URL")
        .unwrap_or_else(|_| vibe_api::app::DEFAULT_FRONTEND_URL.to_string());
    let app = vibe_api::app::build_app(services, &frontend_url);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .unwrap_or_else(|e| panic!("failed to bind 0.0.0.0:{port}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
