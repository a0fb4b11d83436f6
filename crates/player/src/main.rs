//! Rickview Player - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rickview_player::infrastructure::http_client::ApiAdapter;
use rickview_player::ports::outbound::RawApiPort;
use rickview_player::runner::{run, RunnerDeps};
use rickview_player::PlayerConfig;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rickview_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rickview Player");

    let config = PlayerConfig::from_env();
    tracing::info!(
        api_base_url = %config.api_base_url,
        shell = ?config.shell,
        "Configuration loaded"
    );

    // HTTP
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(&config.api_base_url));

    run(RunnerDeps { raw_api, config });
}
