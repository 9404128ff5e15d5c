use crate::config::Config;
use crate::error::ListPromotionalItemsError;
use lambda_http::{Body, Error, Request, RequestExt, Response};
use model::limit::Limit;
use repository::promotional_item::PromotionalItemRepository;
use response::ok;

pub async fn list_promotional_items(
    repository: &PromotionalItemRepository,
    config: &Config,
    event: Request,
) -> Result<Response<Body>, Error> {
    tracing::info!("Received event: {:?}", event);
    if let Some(request_id) = request_id(&event) {
        tracing::info!("Request id: {}", request_id);
    }

    match list(repository, config, &event) {
        Ok(response) => Ok(response),
        Err(err) => {
            tracing::error!("Listing promotional items failed: {}", err);
            Ok(response::error(err.status(), err.to_string()))
        }
    }
}

fn list(
    repository: &PromotionalItemRepository,
    config: &Config,
    event: &Request,
) -> Result<Response<Body>, ListPromotionalItemsError> {
    let limit = requested_limit(event, config);
    tracing::debug!("limit: {}", limit);

    let items = repository.list(&limit);
    tracing::debug!("Promotional items: {:?}", items);

    Ok(ok(&items)?)
}

/// `queryStringParameters.limit` if given, otherwise the configured default.
fn requested_limit(event: &Request, config: &Config) -> Limit {
    let params = event.query_string_parameters();
    match params.first("limit") {
        Some(raw) if !raw.is_empty() => Limit::from_query(raw),
        _ => config.default_limit.clone(),
    }
}

fn request_id(event: &Request) -> Option<&str> {
    event
        .lambda_context_ref()
        .map(|context| context.request_id.as_str())
}
