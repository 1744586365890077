use std::sync::Arc;

use clap::Parser;
use shared::error::{AsConfigError, AsServerError, MainError};
use webserver::app::ApplicationServer;
use webserver::appstate::AppState;
use webserver::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), MainError> {
    let config = AppConfig::parse();
    config.log.init();

    let app_state = AppState::new(Arc::new(config)).into_config_error()?;

    ApplicationServer::serve(app_state).await.into_server_error()
}
