// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! notifnav — native side of the `com.app.notification_settings` channel.
//!
//! The UI layer sends `openNotificationSettings`; the [`SettingsNavigator`]
//! picks the settings screen that fits the running OS release and hands it
//! to the platform bridge. Everything that touches the OS sits behind the
//! traits in [`traits`], so the decision logic runs without a device.

pub mod channel;
pub mod host;
pub mod logging;
pub mod navigator;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use notifnav_core::BridgeConfig;
use notifnav_core::error::Result;

pub use channel::MethodChannel;
pub use navigator::SettingsNavigator;

/// Retrieves the bridge implementation for the target operating system.
///
/// RETURNS: a shared trait object (`dyn PlatformBridge`) that abstracts away
/// the underlying native SDK details.
pub fn platform_bridge() -> Result<Arc<dyn traits::PlatformBridge>> {
    #[cfg(target_os = "android")]
    {
        // Android: uses `jni-rs` against the NDK-provided activity.
        let bridge: Arc<dyn traits::PlatformBridge> =
            Arc::new(android::AndroidBridge::from_ndk_context()?);
        Ok(bridge)
    }
    #[cfg(not(target_os = "android"))]
    {
        // DESKTOP/CI: every call reports `PlatformUnavailable`.
        let bridge: Arc<dyn traits::PlatformBridge> = Arc::new(stub::StubBridge);
        Ok(bridge)
    }
}

/// Build the channel named in `config` with the settings navigator
/// registered on it.
pub fn build_channel(
    config: &BridgeConfig,
    bridge: Arc<dyn traits::PlatformBridge>,
) -> MethodChannel {
    let mut channel = MethodChannel::new(config.channel.as_str());
    Arc::new(SettingsNavigator::new(bridge)).install(&mut channel);
    tracing::info!(channel = %config.channel, "method channel ready");
    channel
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;
    use crate::traits::PlatformBridge;
    use notifnav_core::{MethodCall, MethodResponse, OPEN_NOTIFICATION_SETTINGS};

    #[test]
    fn desktop_bridge_is_the_stub() {
        let bridge = platform_bridge().unwrap();
        assert_eq!(bridge.platform_name(), "Desktop (stub)");
    }

    #[test]
    fn stub_channel_reports_unavailable() {
        let channel = build_channel(&BridgeConfig::default(), platform_bridge().unwrap());
        let response = channel.dispatch(&MethodCall::new(OPEN_NOTIFICATION_SETTINGS));
        match response {
            MethodResponse::Error { code, .. } => assert_eq!(code, "UNAVAILABLE"),
            other => panic!("expected error envelope, got {other:?}"),
        }
    }

    #[test]
    fn channel_uses_configured_name() {
        let config = BridgeConfig {
            channel: "com.example/settings".into(),
            ..BridgeConfig::default()
        };
        let channel = build_channel(&config, platform_bridge().unwrap());
        assert_eq!(channel.name(), "com.example/settings");
    }
}
