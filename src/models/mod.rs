use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Metadata tracked for every uploaded file. `progress` is the only field
/// that changes after creation; its worker drives it from 0 to 100.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileRecord {
    pub id: String,
    pub filename: String,
    pub size: Option<i64>,
    pub progress: u8,
}

impl FileRecord {
    pub fn new(id: String, filename: String, size: Option<i64>) -> Self {
        Self {
            id,
            filename,
            size,
            progress: 0,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadedFile {
    pub file_id: String,
    pub filename: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProgressResponse {
    pub file_id: String,
    pub progress: u8,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResultResponse {
    pub file_id: String,
    pub result: String,
}
