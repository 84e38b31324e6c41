use std::sync::Arc;

use engine::adapters::{JsonSnapshotStore, LogNotifier};
use engine::config::EngineConfig;
use engine::console::{load_prefix, Console};
use engine::services::SessionService;
use engine::{telemetry, AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    telemetry::init_tracing();

    let config = EngineConfig::from_env();
    let store = Arc::new(JsonSnapshotStore::new(config.state_path.clone()));
    let notifier = Arc::new(LogNotifier);
    let service = SessionService::restore(store, notifier).await?;

    let prefix = load_prefix(&config.prefix_path).await;
    Console::new(service, config.prefix_path, prefix).run().await
}
