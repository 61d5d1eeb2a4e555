use crate::error::AppError;
use crate::models::{IdCard, QrPayload, SubmissionRequest};
use crate::state::AppState;

use super::data_uri;

/// Parse a JSON card request. All four fields must be present strings.
pub fn parse_request(body: &[u8]) -> Result<SubmissionRequest, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))
}

/// Issue a card for one submission. Either the whole card comes back or an
/// error does; there is no partial result.
pub fn issue(state: &AppState, request: SubmissionRequest) -> Result<IdCard, AppError> {
    if state.config.strict_validation {
        let has_photo = data_uri::decode(&request.image_data).is_ok_and(|uri| uri.is_image());
        state.validator.check(&request.fields(has_photo))?;
    }

    let payload = QrPayload::from_request(&request)
        .to_text()
        .map_err(|e| AppError::Internal(format!("Failed to serialize QR payload: {e}")))?;

    let qr_code = state.encoder.encode(&payload)?;

    tracing::info!(qr_payload_len = payload.len(), "Issued ID card");

    Ok(IdCard {
        name: request.name,
        email: request.email,
        phno: request.phno,
        image_data: request.image_data,
        qr_code,
    })
}
