use std::sync::Arc;

use talker_server::application::auth_service::AuthService;
use talker_server::application::talker_service::TalkerService;
use talker_server::data::talker_store::JsonFileStore;
use talker_server::infrastructure::config::AppConfig;
use talker_server::infrastructure::logging::init_logging;
use talker_server::server::start_rest_server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;

    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    let mut talkers = TalkerService::new(store);
    if let Some(seed) = &config.seed_file {
        if !seed.is_file() {
            anyhow::bail!("TALKER_SEED_FILE {} does not exist", seed.display());
        }
        talkers = talkers.with_seed(Arc::new(JsonFileStore::existing(seed.clone())));
    }

    start_rest_server(config, talkers, AuthService::new()).await
}
