use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime: String,
    pub data: Vec<u8>,
}

impl DataUri {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Build a base64 `data:` URI.
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Encode an uploaded photo. The MIME type is sniffed from the bytes, then
/// guessed from the file extension, then left generic.
pub fn encode_photo(bytes: &[u8], file_name: Option<&str>) -> String {
    let mime = image::guess_format(bytes)
        .ok()
        .or_else(|| {
            file_name
                .and_then(|n| n.rsplit_once('.'))
                .and_then(|(_, ext)| ImageFormat::from_extension(ext))
        })
        .map(|f| f.to_mime_type())
        .unwrap_or("application/octet-stream");

    encode(mime, bytes)
}

/// Parse a base64 `data:` URI.
pub fn decode(uri: &str) -> Result<DataUri, String> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| "Not a data URI".to_string())?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| "Data URI has no payload separator".to_string())?;

    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| "Data URI is not base64-encoded".to_string())?;

    let data = STANDARD
        .decode(payload)
        .map_err(|e| format!("Invalid base64 payload: {e}"))?;

    Ok(DataUri {
        mime: mime.to_string(),
        data,
    })
}
