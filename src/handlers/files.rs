use crate::api::error::AppError;
use crate::models::{FileRecord, ProgressResponse, ResultResponse, UploadedFile};
use crate::services::processor;
use crate::utils::validation::first_disallowed_extension;
use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use bytes::Bytes;
use uuid::Uuid;

/// Multipart part name carrying file payloads.
const FILES_FIELD: &str = "files";

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = String, content_type = "multipart/form-data", description = "One or more file parts named `files`"),
    responses(
        (status = 200, description = "Files accepted, processing started", body = [UploadedFile]),
        (status = 400, description = "Empty submission or disallowed file type")
    ),
    tag = "files"
)]
pub async fn upload_files(
    State(state): State<crate::AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<UploadedFile>>, AppError> {
    let mut submitted: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        submitted.push((filename, data));
    }

    // A lone part with an empty filename and no bytes is how an empty file
    // picker arrives; treat it the same as no parts at all.
    let empty_submission = submitted.is_empty()
        || (submitted.len() == 1 && submitted[0].0.is_empty() && submitted[0].1.is_empty());
    if empty_submission {
        return Err(AppError::NoFilesUploaded);
    }

    // Whole-batch validation up front: nothing is persisted unless every
    // filename passes.
    if let Some(ext) = first_disallowed_extension(submitted.iter().map(|(name, _)| name.as_str()))
    {
        return Err(AppError::DisallowedExtension(ext));
    }

    let mut accepted = Vec::with_capacity(submitted.len());
    for (filename, data) in submitted {
        let file_id = Uuid::new_v4().to_string();

        // Blob bytes must land before the record becomes visible.
        let size = state.storage.store(&file_id, &data).await.map_err(|e| {
            tracing::error!("Blob write failed for {}: {:?}", file_id, e);
            AppError::Internal(e.to_string())
        })?;

        let record = FileRecord::new(file_id.clone(), filename.clone(), Some(size));
        state
            .records
            .put(record)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        processor::spawn_processing(
            state.records.clone(),
            file_id.clone(),
            state.config.total_steps,
            state.config.step_delay,
        );

        tracing::info!("📦 Accepted {} as {}", filename, file_id);
        accepted.push(UploadedFile { file_id, filename });
    }

    Ok(Json(accepted))
}

#[utoipa::path(
    get,
    path = "/progress/{file_id}",
    params(("file_id" = String, Path, description = "File identifier")),
    responses(
        (status = 200, description = "Current processing progress", body = ProgressResponse),
        (status = 404, description = "File not found")
    ),
    tag = "files"
)]
pub async fn get_progress(
    State(state): State<crate::AppState>,
    Path(file_id): Path<String>,
) -> Result<Json<ProgressResponse>, AppError> {
    let record = state
        .records
        .get(&file_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or(AppError::FileNotFound)?;

    Ok(Json(ProgressResponse {
        file_id: record.id,
        progress: record.progress,
    }))
}

#[utoipa::path(
    get,
    path = "/result/{file_id}",
    params(("file_id" = String, Path, description = "File identifier")),
    responses(
        (status = 200, description = "Extraction result", body = ResultResponse),
        (status = 400, description = "Processing not complete"),
        (status = 404, description = "File not found")
    ),
    tag = "files"
)]
pub async fn get_result(
    State(state): State<crate::AppState>,
    Path(file_id): Path<String>,
) -> Result<Json<ResultResponse>, AppError> {
    let record = state
        .records
        .get(&file_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or(AppError::FileNotFound)?;

    if record.progress < 100 {
        return Err(AppError::ProcessingNotComplete);
    }

    // Stand-in for a future extraction step; only the filename is echoed.
    Ok(Json(ResultResponse {
        file_id: record.id,
        result: format!("Text extracted from the file {}", record.filename),
    }))
}
