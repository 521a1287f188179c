// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings handed over by the host when the bridge is initialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Method channel name the UI layer opens.
    pub channel: String,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel: crate::DEFAULT_CHANNEL.into(),
            log_filter: "info".into(),
        }
    }
}

impl BridgeConfig {
    /// Parse the host-supplied JSON. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_gives_defaults() {
        let config = BridgeConfig::from_json("  ").unwrap();
        assert_eq!(config.channel, "com.app.notification_settings");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = BridgeConfig::from_json(r#"{"log_filter":"debug"}"#).unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.channel, crate::DEFAULT_CHANNEL);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(BridgeConfig::from_json("{channel").is_err());
    }
}
