use super::sheet::SubmissionSheet;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{SubmissionAck, SubmissionPayload};
use log::{error, info};
use std::fs::OpenOptions;
use std::path::Path;

/// Column titles written when the sheet file is created.
pub const SHEET_HEADERS: [&str; 16] = [
    "submission_id",
    "form",
    "requester_type",
    "name",
    "roll_no",
    "department",
    "instructor_name",
    "email",
    "mobile",
    "issue_date",
    "return_date",
    "item_name",
    "quantity",
    "item_issue_date",
    "item_return_date",
    "remark",
];

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `200 OK` with the `SubmissionAck` as JSON.
/// - Malformed body: `400 Bad Request`.
/// - Sheet write failure: `503 Service Unavailable`.
pub async fn process(sheet: web::Data<SubmissionSheet>, body: web::Bytes) -> impl Responder {
    let payload: SubmissionPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => return HttpResponse::BadRequest().body(format!("Malformed submission: {}", e)),
    };

    match append_submission(&sheet, payload).await {
        Ok(ack) => {
            info!("Recorded submission {} ({} item rows)", ack.id, ack.rows);
            HttpResponse::Ok().json(ack)
        }
        Err(e) => {
            error!("Error recording submission: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error recording submission: {}", e))
        }
    }
}

async fn append_submission(
    sheet: &SubmissionSheet,
    payload: SubmissionPayload,
) -> Result<SubmissionAck, String> {
    let id = uuid::Uuid::new_v4().to_string();
    let _guard = sheet.lock.lock().await;

    let path = sheet.path.clone();
    let row_id = id.clone();
    let rows = tokio::task::spawn_blocking(move || append_rows(&path, &row_id, &payload))
        .await
        .map_err(|join_err| format!("join error: {}", join_err))??;

    Ok(SubmissionAck { id, rows })
}

/// Appends one row per requested item to the CSV at `path`, writing the
/// header first when the file is new or empty. Returns the number of rows
/// written.
pub fn append_rows(path: &Path, id: &str, payload: &SubmissionPayload) -> Result<usize, String> {
    let is_new = std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| e.to_string())?;
    let mut writer = csv::Writer::from_writer(file);

    if is_new {
        writer.write_record(SHEET_HEADERS).map_err(|e| e.to_string())?;
    }

    let form = payload.form.to_string();
    let requester_type = payload.requester_type.to_string();
    let optional = |value: &Option<String>| value.clone().unwrap_or_default();

    for item in &payload.items {
        writer
            .write_record([
                id.to_string(),
                form.clone(),
                requester_type.clone(),
                payload.name.clone(),
                payload.roll_no.clone(),
                payload.department.clone(),
                optional(&payload.instructor_name),
                payload.email.clone(),
                payload.mobile.clone(),
                optional(&payload.issue_date),
                optional(&payload.return_date),
                item.item_name.clone(),
                item.quantity.clone(),
                optional(&item.issue_date),
                optional(&item.return_date),
                optional(&item.remark),
            ])
            .map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())?;
    Ok(payload.items.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::submissions::configure_routes;
    use actix_web::{test, App};
    use common::model::requester::RequesterCategory;
    use common::model::variant::FormVariant;
    use common::requests::ItemPayload;

    fn payload(items: &[&str]) -> SubmissionPayload {
        SubmissionPayload {
            form: FormVariant::Store,
            requester_type: RequesterCategory::Student,
            name: "Asha Rao".into(),
            roll_no: "2021UCS001".into(),
            department: "Computer Science and Engineering".into(),
            instructor_name: Some(String::new()),
            email: "asha@lnmiit.ac.in".into(),
            mobile: "9876543210".into(),
            issue_date: Some("2026-10-19".into()),
            return_date: Some("2026-10-26".into()),
            items: items
                .iter()
                .map(|name| ItemPayload {
                    item_name: name.to_string(),
                    quantity: "1".into(),
                    issue_date: None,
                    return_date: None,
                    remark: None,
                })
                .collect(),
        }
    }

    fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap()
            .records()
            .map(Result::unwrap)
            .collect()
    }

    #[::core::prelude::v1::test]
    fn header_is_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");

        assert_eq!(append_rows(&path, "a", &payload(&["Soldering Iron"])).unwrap(), 1);
        assert_eq!(append_rows(&path, "b", &payload(&["Multimeter", "Probe"])).unwrap(), 2);

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "submission_id");
        assert_eq!(&rows[1][0], "a");
        assert_eq!(&rows[1][11], "Soldering Iron");
        assert_eq!(&rows[3][0], "b");
        assert_eq!(&rows[3][11], "Probe");
    }

    #[actix_web::test]
    async fn plain_text_submission_is_acknowledged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SubmissionSheet::new(path.clone())))
                .service(configure_routes("/issue-form")),
        )
        .await;

        let body = serde_json::to_string(&payload(&["Soldering Iron"])).unwrap();
        let req = test::TestRequest::post()
            .uri("/issue-form/api/submissions")
            .insert_header(("Content-Type", "text/plain;charset=utf-8"))
            .set_payload(body)
            .to_request();
        let ack: SubmissionAck = test::call_and_read_body_json(&app, req).await;

        assert_eq!(ack.rows, 1);
        let rows = read_rows(&path);
        assert_eq!(&rows[1][0], ack.id.as_str());
        assert_eq!(&rows[1][5], "Computer Science and Engineering");
    }

    #[actix_web::test]
    async fn malformed_body_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SubmissionSheet::new(path.clone())))
                .service(configure_routes("")),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/submissions")
            .set_payload("{\"name\": 3}")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert!(!path.exists());
    }
}
