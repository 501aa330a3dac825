use std::sync::Arc;

#[tokio::main]
async fn main() {
    jobboard_observability::init();

    let config = jobboard_api::config::Config::from_env();

    let service = match jobboard_api::app::services::build_services(&config).await {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!(error = %e, "failed to build services");
            std::process::exit(1);
        }
    };

    let app = jobboard_api::app::build_app(service);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.bind_addr));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
