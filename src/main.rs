use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backend::api::router;
use backend::catalog::Catalog;
use backend::config::SiteConfig;
use backend::geo::IpapiGeoClient;
use backend::intake::{IntakeClient, NoopIntakeClient, WebhookIntakeClient};
use backend::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "backend=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::new_from_env();

    let intake: Arc<dyn IntakeClient> = match &config.intake_webhook_url {
        Some(url) => Arc::new(WebhookIntakeClient::new(url.clone())?),
        None => {
            info!("INTAKE_WEBHOOK_URL not set, leads will not be forwarded");
            Arc::new(NoopIntakeClient)
        }
    };

    let state = AppState {
        catalog: Arc::new(Catalog::seed()),
        config: Arc::new(config.clone()),
        intake,
        geo: Arc::new(IpapiGeoClient::new()?),
    };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
