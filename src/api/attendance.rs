use crate::{
    error::AppError,
    model::attendance::{AttendanceEntry, AttendanceRecord},
    store::AttendanceStore,
    utils::time::now_ist_timestamp,
};
use actix_web::{HttpResponse, http::header::ContentType, web};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

pub const RECORDED_MESSAGE: &str = "Attendance recorded in IST.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordAttendance {
    #[schema(example = "Asha")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DateQuery {
    /// Date prefix, normally `YYYY-MM-DD`
    #[param(example = "2025-04-16")]
    pub date: Option<String>,
}

/// Record attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = RecordAttendance,
    responses(
        (status = 201, description = "Attendance recorded", body = String, example = json!("Attendance recorded in IST.")),
        (status = 400, description = "Name missing", body = Object, example = json!({
            "error": "Name is required."
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "error": "Internal server error."
        }))
    ),
    tag = "Attendance"
)]
pub async fn record_attendance(
    store: web::Data<dyn AttendanceStore>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let name = parse_record_body(payload.into_inner())?;

    let record = AttendanceRecord::new(name, now_ist_timestamp());

    store.insert(&record).await.map_err(|e| {
        error!(error = %e, name = %record.name, "Error saving attendance");
        AppError::from(e)
    })?;

    info!(name = %record.name, timestamp = %record.timestamp, "Attendance recorded");

    Ok(HttpResponse::Created()
        .content_type(ContentType::plaintext())
        .body(RECORDED_MESSAGE))
}

/// Fetch attendance by date
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(DateQuery),
    responses(
        (status = 200, description = "Records whose timestamp starts with `date`", body = Vec<AttendanceEntry>),
        (status = 400, description = "Date missing", body = Object, example = json!({
            "error": "Date query parameter is required."
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "error": "Internal server error."
        }))
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    store: web::Data<dyn AttendanceStore>,
    query: web::Query<DateQuery>,
) -> Result<HttpResponse, AppError> {
    let date = query
        .into_inner()
        .date
        .filter(|d| !d.is_empty())
        .ok_or_else(|| {
            warn!("Rejected attendance query without date");
            AppError::InvalidInput("Date query parameter is required.")
        })?;

    let records = store.find_by_date_prefix(&date).await.map_err(|e| {
        error!(error = %e, date = %date, "Error fetching attendance");
        AppError::from(e)
    })?;

    let entries: Vec<AttendanceEntry> = records.into_iter().map(AttendanceEntry::from).collect();

    Ok(HttpResponse::Ok().json(entries))
}

/// Pulls a non-empty `name` out of the request body. Only a JSON object can
/// carry one; serde would otherwise read a struct from a sequence like `["x"]`.
fn parse_record_body(body: Value) -> Result<String, AppError> {
    if !body.is_object() {
        warn!(body = %body, "Rejected attendance body that is not an object");
        return Err(AppError::InvalidInput("Name is required."));
    }

    let payload: RecordAttendance = serde_json::from_value(body).map_err(|e| {
        warn!(error = %e, "Rejected attendance body");
        AppError::InvalidInput("Invalid JSON body.")
    })?;

    payload.name.filter(|n| !n.is_empty()).ok_or_else(|| {
        warn!("Rejected attendance without name");
        AppError::InvalidInput("Name is required.")
    })
}
