use std::sync::Arc;

use crate::card::qr::QrEncoder;
use crate::card::validation::Validator;
use crate::config::Config;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub validator: Validator,
    pub encoder: Arc<dyn QrEncoder>,
}

impl AppState {
    pub fn new(config: Config, encoder: Arc<dyn QrEncoder>) -> Self {
        let validator = Validator::new(config.email_domain.clone());
        Self {
            config,
            validator,
            encoder,
        }
    }
}
