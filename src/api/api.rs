use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::api::api_pins::{api_service_pin_delete, api_service_pin_get, api_service_pin_post, api_service_pins_get, api_service_pins_post};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::pinsvc::errors::PinSvcError;
use crate::rpc::enums::rpc_error::RpcError;

/// Largest accepted request body, in bytes.
pub const API_MAX_BODY_SIZE: usize = 64 * 1024;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT, http::header::AUTHORIZATION])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(Arc::clone(&data)));
        cfg.app_data(web::PayloadConfig::new(API_MAX_BODY_SIZE));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/pins")
            .route(web::get().to(api_service_pins_get))
            .route(web::post().to(api_service_pins_post))
        );
        cfg.service(web::resource("/pins/{requestid}")
            .route(web::get().to(api_service_pin_get))
            .route(web::post().to(api_service_pin_post))
            .route(web::delete().to(api_service_pin_delete))
        );
    })
}

pub fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    config: &ApiServerConfig,
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>> + use<>), std::io::Error>
{
    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(Arc::clone(&data)))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// HTTP status reported for an operation error.
pub fn api_service_error_status(error: &PinSvcError) -> StatusCode
{
    match error {
        PinSvcError::InvalidCid { .. } | PinSvcError::InvalidQuery { .. } | PinSvcError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        PinSvcError::NotFound(_) => StatusCode::NOT_FOUND,
        PinSvcError::Cancelled
        | PinSvcError::Rpc(RpcError::Cancelled)
        | PinSvcError::Lookup { source: RpcError::Cancelled, .. } => StatusCode::SERVICE_UNAVAILABLE,
        PinSvcError::Rpc(_)
        | PinSvcError::Lookup { .. }
        | PinSvcError::Task(_)
        | PinSvcError::Multiple(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn api_service_error(error: &PinSvcError) -> HttpResponse
{
    let status = api_service_error_status(error);
    api_service_error_response(status, &error.to_string())
}

pub fn api_service_error_response(status: StatusCode, details: &str) -> HttpResponse
{
    let reason = status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_");
    HttpResponse::build(status).content_type(ContentType::json()).json(json!({
        "error": {
            "reason": reason,
            "details": details
        }
    }))
}

pub async fn api_service_not_found() -> HttpResponse
{
    api_service_error_response(StatusCode::NOT_FOUND, "unknown endpoint")
}
