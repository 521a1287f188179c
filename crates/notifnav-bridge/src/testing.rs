// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording bridge used by the unit tests.

use std::sync::Mutex;

use notifnav_core::error::{NotifNavError, Result};
use notifnav_core::{NavigationTarget, PlatformDescriptor};

use crate::traits::*;

/// Remembers every launched target instead of talking to an OS.
pub struct RecordingBridge {
    descriptor: PlatformDescriptor,
    fail_launch: bool,
    launched: Mutex<Vec<NavigationTarget>>,
}

impl RecordingBridge {
    pub fn new(sdk_int: u32, package: &str) -> Self {
        Self {
            descriptor: PlatformDescriptor::new(sdk_int, package),
            fail_launch: false,
            launched: Mutex::new(Vec::new()),
        }
    }

    /// Make every launch fail as if no settings activity were installed.
    pub fn failing(mut self) -> Self {
        self.fail_launch = true;
        self
    }

    pub fn launched(&self) -> Vec<NavigationTarget> {
        self.launched.lock().unwrap().clone()
    }
}

impl PlatformBridge for RecordingBridge {
    fn platform_name(&self) -> &str {
        "Recording"
    }
}

impl PlatformInfo for RecordingBridge {
    fn descriptor(&self) -> Result<PlatformDescriptor> {
        Ok(self.descriptor.clone())
    }
}

impl NavigationLauncher for RecordingBridge {
    fn launch(&self, target: &NavigationTarget) -> Result<()> {
        if self.fail_launch {
            return Err(NotifNavError::Launch {
                action: target.action().into(),
                reason: "android.content.ActivityNotFoundException".into(),
            });
        }
        self.launched.lock().unwrap().push(target.clone());
        Ok(())
    }
}
