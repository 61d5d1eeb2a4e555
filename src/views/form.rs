use askama::Template;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::card::data_uri;
use crate::card::service;
use crate::card::validation::{Field, FormFields, filter_name};
use crate::models::{IdCard, SubmissionRequest};
use crate::error::AppError;
use crate::notice::{Notice, Placement, SUBMIT_FAILED};
use crate::state::SharedState;

use super::upload::{self, CardForm};

#[derive(Template)]
#[template(path = "card_page.html")]
struct CardPageTemplate {
    title: String,
    email_domain: String,
    name: String,
    email: String,
    phno: String,
    /// Input name that gets `autofocus`.
    focus: &'static str,
    banner: Option<String>,
    field_error: &'static str,
    field_message: String,
    result_ready: bool,
    card: Option<IdCard>,
}

impl CardPageTemplate {
    fn new(state: &SharedState) -> Self {
        Self {
            title: state.config.card_title.clone(),
            email_domain: state.config.email_domain.clone(),
            name: String::new(),
            email: String::new(),
            phno: String::new(),
            focus: Field::Name.input_name(),
            banner: None,
            field_error: "",
            field_message: String::new(),
            result_ready: false,
            card: None,
        }
    }

    fn with_values(mut self, form: &CardForm) -> Self {
        self.name = form.name.clone();
        self.email = form.email.clone();
        self.phno = form.phno.clone();
        self
    }

    fn with_notice(mut self, state: &SharedState, notice: Notice) -> Self {
        if let Some(field) = notice.field {
            self.focus = field.input_name();
        }
        match notice.placement(state.config.notification_style) {
            Placement::Field(field) => {
                self.field_error = field.input_name();
                self.field_message = notice.message;
            }
            Placement::Banner => self.banner = Some(notice.message),
        }
        self
    }

    fn with_card(mut self, card: IdCard) -> Self {
        self.result_ready = true;
        self.card = Some(card);
        self
    }

    fn respond(self, status: StatusCode) -> Response {
        (status, Html(self.render().unwrap_or_default())).into_response()
    }
}

pub async fn form_page(State(state): State<SharedState>) -> Response {
    CardPageTemplate::new(&state).respond(StatusCode::OK)
}

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut form = match upload::parse_card_form(&headers, body).await {
        Ok(form) => form,
        Err(e) => {
            tracing::debug!("Rejected card form: {e}");
            return CardPageTemplate::new(&state)
                .with_notice(&state, Notice::error(e, None))
                .respond(StatusCode::BAD_REQUEST);
        }
    };
    form.name = filter_name(&form.name);

    let fields = FormFields {
        name: &form.name,
        email: &form.email,
        phno: &form.phno,
        has_photo: form.photo.is_some(),
    };
    if let Err(err) = state.validator.check(&fields) {
        return CardPageTemplate::new(&state)
            .with_values(&form)
            .with_notice(&state, Notice::error(err.message(), Some(err.field())))
            .respond(AppError::from(err).status());
    }

    let image_data = form
        .photo
        .as_ref()
        .map(|p| data_uri::encode_photo(&p.bytes, p.file_name.as_deref()))
        .unwrap_or_default();

    let request = SubmissionRequest {
        name: form.name.clone(),
        email: form.email.clone(),
        phno: form.phno.clone(),
        image_data,
    };

    match service::issue(&state, request) {
        Ok(card) => CardPageTemplate::new(&state)
            .with_card(card)
            .respond(StatusCode::OK),
        Err(err) => {
            let status = err.status();
            tracing::warn!("Card form submission failed: {err}");
            CardPageTemplate::new(&state)
                .with_values(&form)
                .with_notice(&state, Notice::error(SUBMIT_FAILED, None))
                .respond(status)
        }
    }
}
