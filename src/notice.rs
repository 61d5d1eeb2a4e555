use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::validation::Field;

pub const SUBMIT_FAILED: &str = "Failed to generate ID card. Please try again.";
pub const SUBMIT_SUCCEEDED: &str = "ID Card generated successfully!";

/// How validation and submission messages are presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStyle {
    /// Error text rendered next to the offending field.
    #[default]
    Inline,
    /// A single summary message above the form.
    Banner,
}

impl FromStr for NotificationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(NotificationStyle::Inline),
            "banner" | "toast" => Ok(NotificationStyle::Banner),
            other => Err(format!("unknown notification style '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Field(Field),
    Banner,
}

impl NotificationStyle {
    /// Where a message about `field` is shown. Messages not tied to a field
    /// always go to the banner.
    pub fn place(self, field: Option<Field>) -> Placement {
        match (self, field) {
            (NotificationStyle::Inline, Some(field)) => Placement::Field(field),
            _ => Placement::Banner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Error,
    Success,
}

/// A user-visible message produced by a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub field: Option<Field>,
}

impl Notice {
    pub fn error(message: impl Into<String>, field: Option<Field>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
            field,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
            field: None,
        }
    }

    pub fn placement(&self, style: NotificationStyle) -> Placement {
        style.place(self.field)
    }
}
