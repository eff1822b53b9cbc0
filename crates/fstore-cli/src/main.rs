use std::process::ExitCode;
use std::sync::Arc;

mod actions;
mod cli;
mod commands;
mod dispatcher;
mod logger;
mod middleware;
mod notifier;
mod output;
mod paginator;
mod reducers;
mod service;
mod shell;
mod state;
mod store;
mod thunks;

#[cfg(test)]
mod test_support;

use fstore_client::HttpFileStorageClient;
use fstore_config::AppConfig;
use middleware::{LoggingMiddleware, NotificationMiddleware};
use notifier::TerminalNotifier;
use service::FileStorageService;
use state::AppState;
use store::{Store, StoreHandle};

#[tokio::main]
async fn main() -> ExitCode {
    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, cli::USAGE);
            return ExitCode::from(2);
        }
    };

    match logger::init() {
        Ok(path) => log::info!("Starting fstore, logging to {:?}", path),
        Err(e) => eprintln!("warning: logging disabled: {:#}", e),
    }

    let config = AppConfig::load();
    log::info!("Using API server {}", config.base_url());

    // Initialize store with middleware
    let notifier = TerminalNotifier::new();
    let mut store = Store::new(AppState::default());

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(NotificationMiddleware::new(Box::new(
        notifier.clone(),
    ))));

    let client = Arc::new(HttpFileStorageClient::new(config.base_url()));
    let service = FileStorageService::new(client, StoreHandle::new(store));

    let result = commands::run(command, &service, &config).await;

    log::info!("Exiting fstore");
    match result {
        Err(e) => {
            log::error!("Command failed: {:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(()) if notifier.error_count() > 0 => {
            log::debug!("Errors shown: {:?}", notifier.errors());
            ExitCode::FAILURE
        }
        Ok(()) => ExitCode::SUCCESS,
    }
}
