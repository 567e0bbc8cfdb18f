//! The upload route: accept a feed file, return the repriced workbook.

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::info;

use repricer_ingest::read_source_table;
use repricer_model::PricingTable;
use repricer_output::write_xlsx_output;
use repricer_transform::{TransformError, apply_repricing, normalize_headers, validate_required};

use crate::error::AppError;
use crate::state::AppState;

/// Stable download name for every processed feed.
pub const PROCESSED_FILENAME: &str = "repriced.xlsx";

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload_feed))
}

async fn index() -> &'static str {
    "repricer: POST a vendor feed (.csv or .xlsx) as multipart field 'file' to /upload\n"
}

async fn upload_feed(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| AppError::BadRequest(error.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|error| AppError::BadRequest(error.to_string()))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }
    let Some((filename, data)) = upload else {
        return Err(AppError::BadRequest("no file part".to_string()));
    };
    if filename.is_empty() {
        return Err(AppError::BadRequest("no selected file".to_string()));
    }
    let safe_name = sanitize_filename(&filename);
    if safe_name.is_empty() {
        return Err(AppError::BadRequest(format!(
            "unusable filename '{filename}'"
        )));
    }

    let upload_path = state.upload_dir.join(&safe_name);
    let processed_path = state.processed_dir.join(PROCESSED_FILENAME);
    let pricing = Arc::clone(&state.pricing);
    let task_path = processed_path.clone();
    let rows = tokio::task::spawn_blocking(move || {
        reprice_upload(&upload_path, &data, &task_path, &pricing)
    })
    .await??;

    info!(filename = %safe_name, rows, "feed repriced");
    let bytes = tokio::fs::read(&processed_path).await?;
    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"repriced.xlsx\"",
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// Persist the upload, run the pipeline, and write the processed workbook.
///
/// Returns the number of repriced rows.
fn reprice_upload(
    upload_path: &Path,
    data: &[u8],
    processed_path: &Path,
    pricing: &PricingTable,
) -> Result<usize, AppError> {
    std::fs::write(upload_path, data)?;
    let table = read_source_table(upload_path)?;
    let normalized = normalize_headers(table);
    validate_required(&normalized).map_err(|error| match error {
        TransformError::MissingColumns { columns } => AppError::Validation {
            missing_columns: columns,
        },
        other => AppError::Internal(other.into()),
    })?;
    let mut df = normalized.to_data_frame()?;
    apply_repricing(&mut df, pricing)?;
    write_xlsx_output(&df, processed_path)?;
    Ok(df.height())
}

/// Reduce a client-supplied filename to something safe to store.
///
/// Path components are stripped and anything outside ASCII alphanumerics,
/// `-`, `_`, and `.` becomes an underscore. Leading and trailing dots go too,
/// so the result can never climb out of the upload directory.
pub fn sanitize_filename(raw: &str) -> String {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(raw);
    let cleaned: String = name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim_matches('.').to_string()
}

/// Create the upload and processed directories if they are missing.
pub fn bootstrap_dirs(upload_dir: &Path, processed_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(upload_dir)?;
    std::fs::create_dir_all(processed_dir)
}
