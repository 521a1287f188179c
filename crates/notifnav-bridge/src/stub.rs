// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are unavailable.
//
// Every trait method returns `PlatformUnavailable`; the real implementation
// lives in the `android` module.

use notifnav_core::error::{NotifNavError, Result};
use notifnav_core::{NavigationTarget, PlatformDescriptor};

use crate::traits::*;

/// No-op bridge returned on non-mobile platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl PlatformInfo for StubBridge {
    fn descriptor(&self) -> Result<PlatformDescriptor> {
        tracing::warn!("PlatformInfo::descriptor called on stub bridge");
        Err(NotifNavError::PlatformUnavailable)
    }
}

impl NavigationLauncher for StubBridge {
    fn launch(&self, target: &NavigationTarget) -> Result<()> {
        tracing::warn!(action = target.action(), "NavigationLauncher::launch called on stub bridge");
        Err(NotifNavError::PlatformUnavailable)
    }
}
