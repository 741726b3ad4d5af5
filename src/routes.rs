use crate::api::attendance;
use actix_web::{HttpResponse, error::InternalError, web};
use serde_json::json;
use tracing::warn;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    // POST /attendance
    cfg.service(
        web::resource("/attendance").route(web::post().to(attendance::record_attendance)),
    );

    // GET /api/attendance?date=YYYY-MM-DD
    cfg.service(
        web::scope("/api").service(
            web::resource("/attendance").route(web::get().to(attendance::list_attendance)),
        ),
    );
}

/// Body parse failures answer with the same JSON error shape as handlers.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejected request body");
        let resp = HttpResponse::BadRequest().json(json!({ "error": "Invalid JSON body." }));
        InternalError::from_response(err, resp).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "Rejected query string");
        let resp = HttpResponse::BadRequest().json(json!({ "error": "Invalid query string." }));
        InternalError::from_response(err, resp).into()
    })
}
