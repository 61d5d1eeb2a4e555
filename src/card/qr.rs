use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::config::QrConfig;

use super::data_uri;

#[derive(Debug)]
pub enum QrError {
    Payload(String),
    Encode(String),
    Render(String),
}

impl std::fmt::Display for QrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QrError::Payload(msg) => write!(f, "QR payload error: {msg}"),
            QrError::Encode(msg) => write!(f, "QR encode error: {msg}"),
            QrError::Render(msg) => write!(f, "QR render error: {msg}"),
        }
    }
}

impl std::error::Error for QrError {}

/// Turns a text payload into a QR image data URI.
pub trait QrEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<String, QrError>;
}

/// Renders QR codes as grayscale PNG images.
pub struct PngQrEncoder {
    ec_level: EcLevel,
    module_px: u32,
}

impl PngQrEncoder {
    pub fn new(config: &QrConfig) -> Self {
        Self {
            ec_level: config.ec_level,
            module_px: config.module_px.max(1),
        }
    }

    pub fn render_png(&self, text: &str) -> Result<Vec<u8>, QrError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), self.ec_level)
            .map_err(|e| QrError::Encode(e.to_string()))?;

        let img = code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_px, self.module_px)
            .build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| QrError::Render(e.to_string()))?;

        Ok(png)
    }
}

impl QrEncoder for PngQrEncoder {
    fn encode(&self, text: &str) -> Result<String, QrError> {
        let png = self.render_png(text)?;
        tracing::debug!(payload_len = text.len(), png_len = png.len(), "Rendered QR code");
        Ok(data_uri::encode("image/png", &png))
    }
}
