//! Transient notifications describing the outcome of the last request

use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown after a successful request
pub const SUCCESS_MESSAGE: &str = "operation succeeded";

/// Category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => f.write_str("success"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A user-visible banner.
///
/// `sequence` is assigned when the notification is raised through a hook and
/// increases with every raise; dismiss timers compare against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
    pub severity: Option<Severity>,
    #[serde(default)]
    pub sequence: u64,
}

impl Notification {
    pub fn success() -> Self {
        Self::raised(SUCCESS_MESSAGE.to_string(), Severity::Success)
    }

    pub fn error(err: &dyn fmt::Display) -> Self {
        Self::raised(format!("Error: {}", err), Severity::Error)
    }

    fn raised(message: String, severity: Severity) -> Self {
        Self {
            visible: true,
            message,
            severity: Some(severity),
            sequence: 0,
        }
    }

    /// The notification a request outcome produces, if any.
    ///
    /// Failures always notify; successes only when `notify_on_success` is set.
    pub fn for_outcome<T>(
        outcome: &Result<T, RequestError>,
        notify_on_success: bool,
    ) -> Option<Self> {
        match outcome {
            Ok(_) if notify_on_success => Some(Self::success()),
            Ok(_) => None,
            Err(err) => Some(Self::error(err)),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Some(Severity::Error)
    }
}
