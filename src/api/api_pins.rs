use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use tokio_util::sync::CancellationToken;
use crate::api::api::api_service_error;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::cluster::structs::content_id::ContentId;
use crate::pinsvc::errors::PinSvcError;
use crate::pinsvc::structs::list_options::ListOptions;
use crate::pinsvc::structs::pin::Pin;

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_pins_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let options = match ListOptions::from_query(request.query_string(), &data.pinsvc_config) {
        Ok(options) => options,
        Err(error) => return api_service_pins_error(&data, &error),
    };

    // Dropped with the handler future when the client goes away.
    let cancel = CancellationToken::new();
    let _cancel_guard = cancel.clone().drop_guard();

    match data.pin_service.list_pins(&cancel, &options).await.into_result() {
        Ok(pin_list) => HttpResponse::Ok().content_type(ContentType::json()).json(pin_list),
        Err(error) => api_service_pins_error(&data, &error),
    }
}

#[tracing::instrument(skip(body, data), level = "debug")]
pub async fn api_service_pins_post(body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_service_pin_add(&body, None, &data).await
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_pin_get(path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let cid = match ContentId::decode(&path.into_inner()) {
        Ok(cid) => cid,
        Err(error) => return api_service_pins_error(&data, &error),
    };

    let cancel = CancellationToken::new();
    let _cancel_guard = cancel.clone().drop_guard();

    match data.pin_service.get_pin_status(&cancel, &cid).await {
        Ok(status) => HttpResponse::Ok().content_type(ContentType::json()).json(status),
        Err(PinSvcError::Rpc(error)) if error.is_not_found() => api_service_pins_error(&data, &PinSvcError::NotFound(cid.to_string())),
        Err(error) => api_service_pins_error(&data, &error),
    }
}

#[tracing::instrument(skip(body, data), level = "debug")]
pub async fn api_service_pin_post(path: web::Path<String>, body: web::Bytes, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let replaces = match ContentId::decode(&path.into_inner()) {
        Ok(cid) => cid,
        Err(error) => return api_service_pins_error(&data, &error),
    };
    api_service_pin_add(&body, Some(replaces), &data).await
}

#[tracing::instrument(skip(data), level = "debug")]
pub async fn api_service_pin_delete(path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    let cid = match ContentId::decode(&path.into_inner()) {
        Ok(cid) => cid,
        Err(error) => return api_service_pins_error(&data, &error),
    };

    let cancel = CancellationToken::new();
    let _cancel_guard = cancel.clone().drop_guard();

    match data.pin_service.remove_pin(&cancel, &cid).await {
        Ok(()) => HttpResponse::Accepted().finish(),
        Err(error) => api_service_pins_error(&data, &error),
    }
}

async fn api_service_pin_add(body: &[u8], replaces: Option<ContentId>, data: &ApiServiceData) -> HttpResponse
{
    let pin = match serde_json::from_slice::<Pin>(body) {
        Ok(pin) => pin,
        Err(error) => return api_service_pins_error(data, &PinSvcError::InvalidBody(error.to_string())),
    };

    let cancel = CancellationToken::new();
    let _cancel_guard = cancel.clone().drop_guard();

    match data.pin_service.add_pin(&cancel, &pin, replaces).await {
        Ok(status) => HttpResponse::Accepted().content_type(ContentType::json()).json(status),
        Err(error) => api_service_pins_error(data, &error),
    }
}

fn api_service_pins_error(data: &ApiServiceData, error: &PinSvcError) -> HttpResponse
{
    tracing::debug!(parent: &data.span, "[API] Request failed: {}", error);
    api_service_error(error)
}
