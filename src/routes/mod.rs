// Route exports
pub mod recommendations;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;
use crate::services::MarketplaceStore;

pub use recommendations::AppState;

pub fn configure_routes<S: MarketplaceStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommendations::configure::<S>),
    );
}

/// JSON and query extractor settings with JSON error bodies
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .app_data(web::PathConfig::default().error_handler(handle_path_error));
}

fn bad_request(error: &str, message: String) -> actix_web::Error {
    let body = ErrorResponse {
        error: error.to_string(),
        message: message.clone(),
        status_code: 400,
    };
    error::InternalError::from_response(message, HttpResponse::BadRequest().json(body)).into()
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    bad_request("invalid_json", format!("Invalid JSON: {}", err))
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    bad_request("invalid_query", format!("Invalid query: {}", err))
}

fn handle_path_error(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    bad_request("invalid_path", format!("Invalid path: {}", err))
}
