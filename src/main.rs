use anyhow::Result;
use resume_generator::{start_web_server, EnhancerConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("resume_generator=info,resugen=info,rocket::server=off")),
        )
        .init();

    let port = std::env::var("ROCKET_PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(8000);

    let config = EnhancerConfig::from_env();

    info!("Starting AI resume builder API server");
    info!(
        "AI enhancement: {}",
        if config.api_key.is_some() {
            "enabled"
        } else {
            "disabled (no GEMINI_API_KEY, content passes through unchanged)"
        }
    );
    info!("Enhancement model: {}", config.model);
    info!("Server: http://0.0.0.0:{}", port);

    start_web_server(config).await
}
