use axum::extract::Multipart;

pub const NO_FILE: &str = "No file uploaded";

/// An uploaded file with its data and metadata.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Pull the `file` field out of a multipart upload.
///
/// Other fields are drained and ignored. Validation of the file itself is
/// left to ingestion.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, String> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();
                file = Some(UploadedFile { filename, data });
            }
            _ => {
                let _ = field.bytes().await;
            }
        }
    }

    file.ok_or_else(|| NO_FILE.to_string())
}
