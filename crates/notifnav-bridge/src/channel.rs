// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Named dispatch table between the UI layer and native handlers.
//
// The host transport delivers raw message bytes; this module decodes them,
// routes by method name, and encodes the reply envelope.

use std::collections::HashMap;

use serde_json::json;

use notifnav_core::codec;
use notifnav_core::error::{NotifNavError, Result};
use notifnav_core::human_errors::humanize_error;
use notifnav_core::{MethodCall, MethodResponse};

/// A registered handler. `Err` is reported back as an error envelope.
pub type MethodHandler = Box<dyn Fn(&MethodCall) -> Result<MethodResponse> + Send + Sync>;

pub struct MethodChannel {
    name: String,
    handlers: HashMap<String, MethodHandler>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `handler` for `method`, replacing any previous one.
    pub fn register<F>(&mut self, method: &str, handler: F) -> &mut Self
    where
        F: Fn(&MethodCall) -> Result<MethodResponse> + Send + Sync + 'static,
    {
        if self
            .handlers
            .insert(method.to_owned(), Box::new(handler))
            .is_some()
        {
            tracing::warn!(channel = %self.name, method, "replacing existing method handler");
        }
        self
    }

    /// Route one call to its handler.
    pub fn dispatch(&self, call: &MethodCall) -> MethodResponse {
        let Some(handler) = self.handlers.get(&call.method) else {
            tracing::debug!(channel = %self.name, method = %call.method, "no handler registered");
            return MethodResponse::not_implemented(call.method.as_str());
        };

        match handler(call) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    channel = %self.name,
                    method = %call.method,
                    error = %e,
                    "method handler failed"
                );
                error_response(&e)
            }
        }
    }

    /// Decode `message`, dispatch it, and encode the reply.
    ///
    /// Undecodable input is answered with an error envelope rather than an
    /// `Err`, so the UI side always gets a reply.
    pub fn handle_message(&self, message: &[u8]) -> Result<Vec<u8>> {
        let response = match codec::decode_call(message) {
            Ok(call) => self.dispatch(&call),
            Err(e) => {
                tracing::warn!(channel = %self.name, error = %e, "dropping malformed call");
                error_response(&e)
            }
        };
        codec::encode_response(&response)
    }
}

/// Build the error envelope for `err`.
///
/// The message slot is shown to the user as-is; details carry the severity
/// and the technical error text.
pub(crate) fn error_response(err: &NotifNavError) -> MethodResponse {
    let human = humanize_error(err);
    MethodResponse::Error {
        code: err.code().to_owned(),
        message: format!("{} {}", human.message, human.suggestion),
        details: json!({
            "severity": human.severity.as_str(),
            "detail": err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::Value;

    use super::*;
    use crate::navigator::SettingsNavigator;
    use crate::testing::RecordingBridge;
    use notifnav_core::{DEFAULT_CHANNEL, OPEN_NOTIFICATION_SETTINGS};

    fn channel_with(bridge: &Arc<RecordingBridge>) -> MethodChannel {
        let mut channel = MethodChannel::new(DEFAULT_CHANNEL);
        Arc::new(SettingsNavigator::new(bridge.clone())).install(&mut channel);
        channel
    }

    #[test]
    fn open_settings_round_trip() {
        let bridge = Arc::new(RecordingBridge::new(33, "com.example.app"));
        let channel = channel_with(&bridge);
        assert_eq!(channel.name(), "com.app.notification_settings");

        let reply = channel
            .handle_message(br#"{"method":"openNotificationSettings","args":null}"#)
            .unwrap();
        assert_eq!(reply, b"[null]");
        assert_eq!(bridge.launched().len(), 1);
    }

    #[test]
    fn unknown_method_gets_empty_reply() {
        let bridge = Arc::new(RecordingBridge::new(33, "com.example.app"));
        let channel = channel_with(&bridge);

        let reply = channel
            .handle_message(br#"{"method":"someOtherMethod"}"#)
            .unwrap();
        assert!(reply.is_empty());
        assert_eq!(
            channel.dispatch(&MethodCall::new("someOtherMethod")),
            MethodResponse::not_implemented("someOtherMethod")
        );
        assert!(bridge.launched().is_empty());
    }

    #[test]
    fn launch_failure_becomes_error_envelope() {
        let bridge = Arc::new(RecordingBridge::new(33, "com.example.app").failing());
        let channel = channel_with(&bridge);

        let reply = channel
            .handle_message(br#"{"method":"openNotificationSettings"}"#)
            .unwrap();
        let envelope: Vec<Value> = serde_json::from_slice(&reply).unwrap();
        assert_eq!(envelope.len(), 3);
        assert_eq!(envelope[0], "LAUNCH_FAILED");
        assert!(
            envelope[2]["detail"]
                .as_str()
                .unwrap()
                .contains("ActivityNotFoundException")
        );
    }

    #[test]
    fn error_message_carries_the_suggestion() {
        let err = NotifNavError::Launch {
            action: "android.settings.APP_NOTIFICATION_SETTINGS".into(),
            reason: "no activity".into(),
        };
        let human = humanize_error(&err);
        match error_response(&err) {
            MethodResponse::Error {
                code,
                message,
                details,
            } => {
                assert_eq!(code, "LAUNCH_FAILED");
                assert!(message.starts_with(&human.message));
                assert!(message.ends_with(&human.suggestion));
                assert_eq!(details["severity"], "action_required");
            }
            other => panic!("expected error envelope, got {other:?}"),
        }
    }

    #[test]
    fn malformed_message_gets_error_envelope() {
        let channel = MethodChannel::new(DEFAULT_CHANNEL);
        let reply = channel.handle_message(b"{not json").unwrap();
        let envelope: Vec<Value> = serde_json::from_slice(&reply).unwrap();
        assert_eq!(envelope[0], "MALFORMED_CALL");
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut channel = MethodChannel::new(DEFAULT_CHANNEL);
        channel
            .register(OPEN_NOTIFICATION_SETTINGS, |_| Ok(MethodResponse::ack()))
            .register(OPEN_NOTIFICATION_SETTINGS, |_| {
                Ok(MethodResponse::Success(Value::Bool(true)))
            });
        assert_eq!(
            channel.dispatch(&MethodCall::new(OPEN_NOTIFICATION_SETTINGS)),
            MethodResponse::Success(Value::Bool(true))
        );
    }
}
