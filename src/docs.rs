use crate::api::attendance::RecordAttendance;
use crate::model::attendance::{AttendanceEntry, AttendanceStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        version = "1.0.0",
        description = r#"
## Attendance Recorder

Records a name with a server-generated timestamp in **IST** (Asia/Kolkata)
and lists the records for a given date.

- `POST /attendance` with `{"name": "..."}`
- `GET /api/attendance?date=YYYY-MM-DD`

Dates are matched as a text prefix of the stored `YYYY-MM-DD HH:mm:ss` timestamp.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::record_attendance,
        crate::api::attendance::list_attendance,
    ),
    components(schemas(RecordAttendance, AttendanceEntry, AttendanceStatus)),
    tags(
        (name = "Attendance", description = "Attendance recording APIs"),
    )
)]
pub struct ApiDoc;
