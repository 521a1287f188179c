// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the notification-settings bridge.

use serde::Deserialize;
use serde_json::Value;

/// Channel the host UI layer opens to reach this bridge.
pub const DEFAULT_CHANNEL: &str = "com.app.notification_settings";

/// The one method the bridge understands.
pub const OPEN_NOTIFICATION_SETTINGS: &str = "openNotificationSettings";

/// A named request arriving from the UI layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MethodCall {
    /// Name of the requested operation.
    pub method: String,
    /// Call arguments. `openNotificationSettings` takes none.
    #[serde(default)]
    pub args: Value,
}

impl MethodCall {
    /// A call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Value::Null,
        }
    }
}

/// Outcome of handling one [`MethodCall`].
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    /// Handled; carries the (possibly null) result payload.
    Success(Value),
    /// Handled, but the operation failed and the failure is reported back.
    Error {
        code: String,
        message: String,
        details: Value,
    },
    /// No handler for this method name. Not an error for the caller.
    NotImplemented { method: String },
}

impl MethodResponse {
    /// Success acknowledgement with an empty payload.
    pub fn ack() -> Self {
        Self::Success(Value::Null)
    }

    pub fn not_implemented(method: impl Into<String>) -> Self {
        Self::NotImplemented {
            method: method.into(),
        }
    }
}

/// Read-only facts about the host platform, supplied by the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// Android API level (`Build.VERSION.SDK_INT`).
    pub sdk_int: u32,
    /// Package name of the running application.
    pub package_name: String,
}

impl PlatformDescriptor {
    pub fn new(sdk_int: u32, package_name: impl Into<String>) -> Self {
        Self {
            sdk_int,
            package_name: package_name.into(),
        }
    }
}
