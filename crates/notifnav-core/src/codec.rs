// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// JSON method codec, matching what the UI layer's channel speaks:
//
//   call            {"method": "<name>", "args": <value>}
//   success reply   [<result>]
//   error reply     ["<code>", "<message>", <details>]
//   not implemented empty reply (zero bytes)

use serde_json::{Value, json};

use crate::error::{NotifNavError, Result};
use crate::types::{MethodCall, MethodResponse};

/// Decode an inbound method call.
pub fn decode_call(bytes: &[u8]) -> Result<MethodCall> {
    serde_json::from_slice(bytes).map_err(|e| NotifNavError::MalformedCall(e.to_string()))
}

/// Encode a reply envelope.
pub fn encode_response(response: &MethodResponse) -> Result<Vec<u8>> {
    let envelope = match response {
        MethodResponse::Success(result) => json!([result]),
        MethodResponse::Error {
            code,
            message,
            details,
        } => json!([code, message, details]),
        MethodResponse::NotImplemented { .. } => return Ok(Vec::new()),
    };
    Ok(serde_json::to_vec(&envelope)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OPEN_NOTIFICATION_SETTINGS;

    #[test]
    fn decodes_call_without_args() {
        let call = decode_call(br#"{"method":"openNotificationSettings","args":null}"#).unwrap();
        assert_eq!(call.method, OPEN_NOTIFICATION_SETTINGS);
        assert_eq!(call.args, Value::Null);
    }

    #[test]
    fn rejects_call_without_method() {
        let err = decode_call(br#"{"args":null}"#).unwrap_err();
        assert!(matches!(err, NotifNavError::MalformedCall(_)));
        let err = decode_call(b"not json").unwrap_err();
        assert!(matches!(err, NotifNavError::MalformedCall(_)));
    }

    #[test]
    fn ack_encodes_as_single_null() {
        let bytes = encode_response(&MethodResponse::ack()).unwrap();
        assert_eq!(bytes, b"[null]");
    }

    #[test]
    fn not_implemented_is_empty_reply() {
        let bytes = encode_response(&MethodResponse::not_implemented("someOtherMethod")).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn error_envelope_has_three_slots() {
        let response = MethodResponse::Error {
            code: "LAUNCH_FAILED".into(),
            message: "Couldn't open settings.".into(),
            details: Value::String("no activity".into()),
        };
        let bytes = encode_response(&response).unwrap();
        let raw: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            raw,
            json!(["LAUNCH_FAILED", "Couldn't open settings.", "no activity"])
        );
    }
}
