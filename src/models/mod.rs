pub mod card;

pub use card::{IdCard, QrPayload, SubmissionRequest};
