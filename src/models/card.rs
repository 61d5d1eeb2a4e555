use serde::{Deserialize, Serialize};

use crate::card::validation::FormFields;

/// Fields submitted by the form, as they travel over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub phno: String,
    /// Photo as a base64 data URI.
    pub image_data: String,
}

impl SubmissionRequest {
    pub fn fields(&self, has_photo: bool) -> FormFields<'_> {
        FormFields {
            name: &self.name,
            email: &self.email,
            phno: &self.phno,
            has_photo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdCard {
    pub name: String,
    pub email: String,
    pub phno: String,
    pub image_data: String,
    /// QR image of the [`QrPayload`] as a PNG data URI.
    pub qr_code: String,
}

/// Text encoded into the QR image. Keys serialize in declaration order, so the
/// same three fields always yield the same bytes. The photo is left out to
/// keep the code small enough to scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub name: String,
    pub email: String,
    pub phno: String,
}

impl QrPayload {
    pub fn from_request(request: &SubmissionRequest) -> Self {
        QrPayload {
            name: request.name.clone(),
            email: request.email.clone(),
            phno: request.phno.clone(),
        }
    }

    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_text(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
