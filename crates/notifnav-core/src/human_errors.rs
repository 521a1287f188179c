// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages surfaced to the UI layer.
//
// The technical error string still travels in the envelope's details slot;
// these texts are what the app can show the user directly.

use crate::error::NotifNavError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User can fix it by hand (open settings manually).
    ActionRequired,
    /// Not fixable on this device or build.
    Permanent,
    /// Programming error on the calling side.
    Internal,
}

impl Severity {
    /// Name sent to the UI layer in the error envelope's details.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActionRequired => "action_required",
            Self::Permanent => "permanent",
            Self::Internal => "internal",
        }
    }
}

/// A plain-language error with an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Drives presentation in the UI.
    pub severity: Severity,
}

/// Convert a `NotifNavError` into a `HumanError`.
pub fn humanize_error(err: &NotifNavError) -> HumanError {
    match err {
        NotifNavError::Launch { .. } => HumanError {
            message: "We couldn't open notification settings.".into(),
            suggestion: "Open the Settings app, go to Apps, pick this app and choose Notifications.".into(),
            severity: Severity::ActionRequired,
        },

        NotifNavError::PlatformUnavailable => HumanError {
            message: "Notification settings aren't available here.".into(),
            suggestion: "This shortcut only works on a phone or tablet.".into(),
            severity: Severity::Permanent,
        },

        NotifNavError::Bridge(_) => HumanError {
            message: "The app couldn't talk to the system.".into(),
            suggestion: "Restart the app and try again.".into(),
            severity: Severity::ActionRequired,
        },

        NotifNavError::MalformedCall(_) | NotifNavError::Serialization(_) => HumanError {
            message: "Something went wrong inside the app.".into(),
            suggestion: "Please update the app. If it keeps happening, contact support.".into(),
            severity: Severity::Internal,
        },
    }
}
