use axum::http::HeaderMap;
use bytes::Bytes;

/// Fields of the HTML card form.
#[derive(Debug, Default)]
pub struct CardForm {
    pub name: String,
    pub email: String,
    pub phno: String,
    pub photo: Option<UploadedPhoto>,
}

#[derive(Debug)]
pub struct UploadedPhoto {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// Parse the multipart card form using multer. An empty file part counts as
/// no photo, which is what browsers send when nothing was picked.
pub async fn parse_card_form(headers: &HeaderMap, body: Bytes) -> Result<CardForm, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = CardForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "photo" => {
                let file_name = field.file_name().map(|s| s.to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Photo read error: {e}"))?;
                if !bytes.is_empty() {
                    form.photo = Some(UploadedPhoto { file_name, bytes });
                }
            }
            "name" | "email" | "phno" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| format!("Field read error: {e}"))?;
                match name.as_str() {
                    "name" => form.name = value,
                    "email" => form.email = value,
                    _ => form.phno = value,
                }
            }
            other => tracing::debug!("Ignoring unknown form field '{other}'"),
        }
    }

    Ok(form)
}
