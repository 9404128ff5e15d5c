mod config;
mod error;
mod handler;
mod logging;

use config::Config;
use handler::list_promotional_items;
use lambda_http::{run, service_fn, Error, Request};
use repository::promotional_item::PromotionalItemRepository;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    logging::init(&config.stage);

    tracing::info!(
        "Starting with stage {} and default limit {}",
        config.stage,
        config.default_limit
    );
    if let Some(database) = &config.database {
        tracing::debug!("Database settings: {:?}", database);
    }

    let config_ref = &config;
    let repository_ref = &PromotionalItemRepository::with_static_catalog();

    run(service_fn(move |event: Request| async move {
        list_promotional_items(repository_ref, config_ref, event).await
    }))
    .await?;
    Ok(())
}
