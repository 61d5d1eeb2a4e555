pub mod data_uri;
pub mod qr;
pub mod service;
pub mod validation;
