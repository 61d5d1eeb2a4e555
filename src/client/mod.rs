//! Form controller for the card service.
//!
//! Holds the view state of one card form: entered values, the current notice,
//! the in-flight flag that disables submission, and the "result ready" flag
//! that switches the view from the form to the issued card.

pub mod transport;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::card::data_uri;
use crate::card::validation::{Field, FormFields, ValidationError, Validator, filter_name};
use crate::models::{IdCard, SubmissionRequest};
use crate::notice::{Notice, NotificationStyle, Placement, SUBMIT_FAILED, SUBMIT_SUCCEEDED};

use transport::{CardTransport, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phno: String,
    pub photo: Option<Photo>,
    pub notice: Option<Notice>,
    pub focus: Option<Field>,
    pub loading: bool,
    pub result_ready: bool,
    pub card: Option<IdCard>,
}

impl FormState {
    pub fn submit_enabled(&self) -> bool {
        !self.loading
    }

    fn fields(&self) -> FormFields<'_> {
        FormFields {
            name: &self.name,
            email: &self.email,
            phno: &self.phno,
            has_photo: self.photo.is_some(),
        }
    }
}

#[derive(Debug)]
pub enum SubmitError {
    /// A submission is already running.
    InFlight,
    Validation(ValidationError),
    Photo(String),
    Transport(TransportError),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::InFlight => write!(f, "A submission is already in progress"),
            SubmitError::Validation(err) => write!(f, "{err}"),
            SubmitError::Photo(msg) => write!(f, "Photo conversion failed: {msg}"),
            SubmitError::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SubmitError {}

pub struct FormController<T> {
    transport: T,
    validator: Validator,
    style: NotificationStyle,
    state: Mutex<FormState>,
}

impl<T: CardTransport> FormController<T> {
    pub fn new(transport: T, validator: Validator, style: NotificationStyle) -> Self {
        Self {
            transport,
            validator,
            style,
            state: Mutex::new(FormState::default()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn style(&self) -> NotificationStyle {
        self.style
    }

    /// Where the current notice belongs under the configured style.
    pub fn notice_placement(&self) -> Option<Placement> {
        self.lock()
            .notice
            .as_ref()
            .map(|notice| notice.placement(self.style))
    }

    pub fn snapshot(&self) -> FormState {
        self.lock().clone()
    }

    /// Name keystrokes: characters outside `[A-Za-z ]` are dropped.
    pub fn input_name(&self, raw: &str) {
        self.lock().name = filter_name(raw);
    }

    pub fn input_email(&self, raw: &str) {
        self.lock().email = raw.to_string();
    }

    pub fn input_phno(&self, raw: &str) {
        self.lock().phno = raw.to_string();
    }

    pub fn select_photo(&self, photo: Option<Photo>) {
        self.lock().photo = photo;
    }

    /// Leave the card view. Entered values stay as they were.
    pub fn back_to_form(&self) {
        self.lock().result_ready = false;
    }

    /// Validate, convert the photo, and send one request.
    ///
    /// Validation failures never reach the transport. While the photo
    /// conversion and the request are pending, further calls return
    /// [`SubmitError::InFlight`].
    pub async fn submit(&self) -> Result<IdCard, SubmitError> {
        let (name, email, phno, photo) = {
            let mut state = self.lock();
            if state.loading {
                return Err(SubmitError::InFlight);
            }
            if let Err(err) = self.validator.check(&state.fields()) {
                state.notice = Some(Notice::error(err.message(), Some(err.field())));
                state.focus = Some(err.field());
                return Err(SubmitError::Validation(err));
            }
            state.loading = true;
            state.notice = None;
            state.focus = None;
            (
                state.name.clone(),
                state.email.clone(),
                state.phno.clone(),
                state.photo.clone(),
            )
        };

        let image_data = match photo {
            Some(photo) => tokio::task::spawn_blocking(move || {
                data_uri::encode_photo(&photo.bytes, photo.file_name.as_deref())
            })
            .await
            .map_err(|e| e.to_string()),
            None => Err("no photo selected".to_string()),
        };
        let image_data = match image_data {
            Ok(uri) => uri,
            Err(msg) => {
                self.fail(SUBMIT_FAILED);
                return Err(SubmitError::Photo(msg));
            }
        };

        let request = SubmissionRequest {
            name,
            email,
            phno,
            image_data,
        };

        match self.transport.submit(&request).await {
            Ok(card) => {
                let mut state = self.lock();
                state.loading = false;
                state.card = Some(card.clone());
                state.result_ready = true;
                state.notice = Some(Notice::success(SUBMIT_SUCCEEDED));
                Ok(card)
            }
            Err(err) => {
                tracing::warn!("Card submission failed: {err}");
                self.fail(SUBMIT_FAILED);
                Err(SubmitError::Transport(err))
            }
        }
    }

    fn fail(&self, message: &str) {
        let mut state = self.lock();
        state.loading = false;
        state.notice = Some(Notice::error(message, None));
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
