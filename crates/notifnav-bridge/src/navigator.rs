// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Opens the notification settings screen for the running application.

use std::sync::Arc;

use notifnav_core::error::Result;
use notifnav_core::{MethodCall, MethodResponse, NavigationTarget, OPEN_NOTIFICATION_SETTINGS};

use crate::channel::MethodChannel;
use crate::traits::{NavigationLauncher, PlatformBridge, PlatformInfo};

/// Handles `openNotificationSettings` by launching the platform-appropriate
/// settings screen.
///
/// Holds no state between calls; concurrent calls each issue their own
/// launch.
pub struct SettingsNavigator {
    bridge: Arc<dyn PlatformBridge>,
}

impl SettingsNavigator {
    pub fn new(bridge: Arc<dyn PlatformBridge>) -> Self {
        Self { bridge }
    }

    /// Handle one method call.
    ///
    /// Unknown method names yield `NotImplemented` without touching the OS.
    /// A failed launch is returned as `Err` for the channel to report.
    pub fn handle(&self, call: &MethodCall) -> Result<MethodResponse> {
        if call.method != OPEN_NOTIFICATION_SETTINGS {
            tracing::debug!(method = %call.method, "unhandled method");
            return Ok(MethodResponse::not_implemented(call.method.as_str()));
        }

        self.open_notification_settings()?;
        Ok(MethodResponse::ack())
    }

    /// Select and launch the settings screen, returning the target used.
    pub fn open_notification_settings(&self) -> Result<NavigationTarget> {
        let descriptor = self.bridge.descriptor()?;
        let target = NavigationTarget::for_platform(&descriptor);

        tracing::info!(
            sdk_int = descriptor.sdk_int,
            package = %descriptor.package_name,
            action = target.action(),
            platform = self.bridge.platform_name(),
            "opening notification settings"
        );

        self.bridge.launch(&target)?;
        Ok(target)
    }

    /// Register this navigator on `channel` under `openNotificationSettings`.
    pub fn install(self: Arc<Self>, channel: &mut MethodChannel) {
        channel.register(OPEN_NOTIFICATION_SETTINGS, move |call| self.handle(call));
    }
}
