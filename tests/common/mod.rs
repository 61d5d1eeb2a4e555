#![allow(dead_code)]

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use idcarder::card::data_uri;
use idcarder::card::qr::{QrEncoder, QrError};
use idcarder::config::{Config, QrConfig};
use idcarder::models::QrPayload;
use idcarder::notice::NotificationStyle;

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to the card endpoint, return (body, status).
    pub async fn generate(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/generate-id-card"))
            .json(data)
            .send()
            .await
            .expect("generate request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Encoder that always fails, standing in for a broken QR library.
pub struct FailingEncoder;

impl QrEncoder for FailingEncoder {
    fn encode(&self, _text: &str) -> Result<String, QrError> {
        Err(QrError::Encode("forced failure".to_string()))
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        email_domain: "@gmail.com".to_string(),
        strict_validation: false,
        notification_style: NotificationStyle::Inline,
        cors_origin: "*".to_string(),
        max_body_size: 52_428_800,
        qr: QrConfig::default(),
        card_title: "Student ID Card".to_string(),
        log_level: "warn".to_string(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config(), None).await
}

/// Spawn the app on a random port, optionally with a custom QR encoder.
pub async fn spawn_app_with(config: Config, encoder: Option<Arc<dyn QrEncoder>>) -> TestApp {
    let app = match encoder {
        Some(encoder) => idcarder::build_app_with_encoder(config, encoder),
        None => idcarder::build_app(config),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

/// A small PNG to stand in for an uploaded photo.
pub fn photo_png() -> Vec<u8> {
    let img = RgbImage::from_pixel(4, 4, Rgb([200, 120, 40]));
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    png
}

pub fn photo_data_uri() -> String {
    data_uri::encode("image/png", &photo_png())
}

pub fn jane() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@gmail.com",
        "phno": "9876543210",
        "imageData": photo_data_uri(),
    })
}

/// Decode a QR data URI back into the text it carries.
pub fn decode_qr_text(qr_data_uri: &str) -> String {
    let uri = data_uri::decode(qr_data_uri).expect("qrCode is not a data URI");
    assert_eq!(uri.mime, "image/png");

    let img = image::load_from_memory(&uri.data)
        .expect("qrCode is not a readable image")
        .to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one QR code");
    let (_, content) = grids[0].decode().expect("QR code did not decode");
    content
}

pub fn decode_qr_payload(qr_data_uri: &str) -> QrPayload {
    QrPayload::from_text(&decode_qr_text(qr_data_uri)).expect("QR text is not a payload")
}
