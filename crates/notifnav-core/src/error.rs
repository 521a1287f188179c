// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for notifnav.

use thiserror::Error;

/// Top-level error type for all notifnav operations.
#[derive(Debug, Error)]
pub enum NotifNavError {
    // -- Channel errors --
    #[error("malformed method call: {0}")]
    MalformedCall(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Navigation errors --
    #[error("could not launch {action}: {reason}")]
    Launch { action: String, reason: String },

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

impl NotifNavError {
    /// Stable error code placed in the first slot of an error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedCall(_) => "MALFORMED_CALL",
            Self::Serialization(_) => "SERIALIZATION",
            Self::Launch { .. } => "LAUNCH_FAILED",
            Self::Bridge(_) => "BRIDGE",
            Self::PlatformUnavailable => "UNAVAILABLE",
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NotifNavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_error_has_stable_code() {
        let err = NotifNavError::Launch {
            action: "android.settings.APP_NOTIFICATION_SETTINGS".into(),
            reason: "ActivityNotFoundException".into(),
        };
        assert_eq!(err.code(), "LAUNCH_FAILED");
        assert!(err.to_string().contains("APP_NOTIFICATION_SETTINGS"));
    }

    #[test]
    fn json_errors_convert() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: NotifNavError = json_err.into();
        assert_eq!(err.code(), "SERIALIZATION");
    }
}
