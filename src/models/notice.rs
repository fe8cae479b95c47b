//! User-facing notices
//!
//! Registration outcomes are surfaced to the presentation layer as
//! non-blocking notices rather than errors; idempotent repeats are
//! informational by design.

use serde::{Deserialize, Serialize};

/// Notice severity, mapped by the presentation layer to its own styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
}

/// A non-blocking notification for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn success(title: &str, body: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    pub fn info(title: &str, body: &str) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    pub fn warning(title: &str, body: &str) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}
