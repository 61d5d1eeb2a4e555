use std::net::IpAddr;

use axum::http::HeaderValue;
use qrcode::EcLevel;

use crate::notice::NotificationStyle;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub email_domain: String,
    pub strict_validation: bool,
    pub notification_style: NotificationStyle,
    pub cors_origin: String,
    pub max_body_size: usize,
    pub qr: QrConfig,
    pub card_title: String,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct QrConfig {
    pub ec_level: EcLevel,
    /// Edge length of one QR module in pixels.
    pub module_px: u32,
}

impl Default for QrConfig {
    fn default() -> Self {
        QrConfig {
            ec_level: EcLevel::M,
            module_px: 4,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("IDCARD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid IDCARD_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let email_domain = env_or("IDCARD_EMAIL_DOMAIN", "@gmail.com");
        if email_domain.is_empty() {
            return Err("IDCARD_EMAIL_DOMAIN must not be empty".to_string());
        }

        let strict_validation = parse_bool("IDCARD_STRICT_VALIDATION", &env_or("IDCARD_STRICT_VALIDATION", "false"))?;

        let notification_style: NotificationStyle = env_or("IDCARD_NOTIFICATION_STYLE", "inline")
            .parse()
            .map_err(|e| format!("Invalid IDCARD_NOTIFICATION_STYLE: {e}"))?;

        let cors_origin = env_or("IDCARD_CORS_ORIGIN", "*");
        HeaderValue::from_str(&cors_origin)
            .map_err(|e| format!("Invalid IDCARD_CORS_ORIGIN: {e}"))?;

        let max_body_size: usize = env_or("IDCARD_MAX_BODY_SIZE", "52428800")
            .parse()
            .map_err(|e| format!("Invalid IDCARD_MAX_BODY_SIZE: {e}"))?;

        let ec_level = parse_ec_level(&env_or("IDCARD_QR_EC_LEVEL", "M"))?;

        let module_px: u32 = env_or("IDCARD_QR_MODULE_PX", "4")
            .parse()
            .map_err(|e| format!("Invalid IDCARD_QR_MODULE_PX: {e}"))?;
        if module_px == 0 {
            return Err("IDCARD_QR_MODULE_PX must be at least 1".to_string());
        }

        let card_title = env_or("IDCARD_TITLE", "Student ID Card");
        let log_level = env_or("IDCARD_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            email_domain,
            strict_validation,
            notification_style,
            cors_origin,
            max_body_size,
            qr: QrConfig { ec_level, module_px },
            card_title,
            log_level,
        })
    }
}

fn parse_ec_level(value: &str) -> Result<EcLevel, String> {
    match value.to_ascii_uppercase().as_str() {
        "L" => Ok(EcLevel::L),
        "M" => Ok(EcLevel::M),
        "Q" => Ok(EcLevel::Q),
        "H" => Ok(EcLevel::H),
        other => Err(format!("Invalid IDCARD_QR_EC_LEVEL '{other}': expected one of L, M, Q, H")),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(format!("Invalid {key}: '{other}' is not a boolean")),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
