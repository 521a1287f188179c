// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the native side of the bridge.

use notifnav_core::error::Result;
use notifnav_core::{NavigationTarget, PlatformDescriptor};

/// Unified bridge that groups the native capabilities the navigator needs.
pub trait PlatformBridge: PlatformInfo + NavigationLauncher + Send + Sync {
    /// Human-readable platform name (e.g. "Android").
    fn platform_name(&self) -> &str;
}

/// Read-only facts about the running platform and application.
pub trait PlatformInfo {
    /// API level and package name of the running application.
    fn descriptor(&self) -> Result<PlatformDescriptor>;
}

/// Hands navigation requests to the OS.
pub trait NavigationLauncher {
    /// Ask the OS to bring `target` to the foreground.
    /// Returns once the request is dispatched; the user's interaction with
    /// the opened screen is never observed.
    fn launch(&self, target: &NavigationTarget) -> Result<()>;
}
