// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Navigation-target selection.
//
// Android O (API 26) added a dedicated per-app notification settings screen.
// Older releases only offer the generic "App info" screen, which is addressed
// through a `package:` URI instead of an extra.

use crate::types::PlatformDescriptor;

/// First API level with `Settings.ACTION_APP_NOTIFICATION_SETTINGS`.
pub const APP_NOTIFICATION_SETTINGS_MIN_SDK: u32 = 26;

/// `Settings.ACTION_APP_NOTIFICATION_SETTINGS`
pub const ACTION_APP_NOTIFICATION_SETTINGS: &str = "android.settings.APP_NOTIFICATION_SETTINGS";

/// `Settings.ACTION_APPLICATION_DETAILS_SETTINGS`
pub const ACTION_APPLICATION_DETAILS_SETTINGS: &str =
    "android.settings.APPLICATION_DETAILS_SETTINGS";

/// `Settings.EXTRA_APP_PACKAGE`
pub const EXTRA_APP_PACKAGE: &str = "android.provider.extra.APP_PACKAGE";

/// An OS-level screen request: action kind plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Per-app notification settings; package passed as an extra.
    AppNotificationSettings { package: String },
    /// Application details ("App info"); package encoded in the data URI.
    ApplicationDetailsSettings { package: String },
}

impl NavigationTarget {
    /// Pick the target for the given platform.
    pub fn for_platform(descriptor: &PlatformDescriptor) -> Self {
        select_target(descriptor.sdk_int, &descriptor.package_name)
    }

    /// Intent action string.
    pub fn action(&self) -> &'static str {
        match self {
            Self::AppNotificationSettings { .. } => ACTION_APP_NOTIFICATION_SETTINGS,
            Self::ApplicationDetailsSettings { .. } => ACTION_APPLICATION_DETAILS_SETTINGS,
        }
    }

    pub fn package(&self) -> &str {
        match self {
            Self::AppNotificationSettings { package }
            | Self::ApplicationDetailsSettings { package } => package,
        }
    }

    /// String extras to put on the intent.
    pub fn extras(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::AppNotificationSettings { package } => {
                vec![(EXTRA_APP_PACKAGE, package.as_str())]
            }
            Self::ApplicationDetailsSettings { .. } => Vec::new(),
        }
    }

    /// Data URI for the intent, if the target is addressed by one.
    pub fn data_uri(&self) -> Option<String> {
        match self {
            Self::AppNotificationSettings { .. } => None,
            Self::ApplicationDetailsSettings { package } => Some(format!("package:{package}")),
        }
    }
}

/// Choose the settings screen for `sdk_int`, addressed at `package`.
pub fn select_target(sdk_int: u32, package: &str) -> NavigationTarget {
    if sdk_int >= APP_NOTIFICATION_SETTINGS_MIN_SDK {
        NavigationTarget::AppNotificationSettings {
            package: package.to_owned(),
        }
    } else {
        NavigationTarget::ApplicationDetailsSettings {
            package: package.to_owned(),
        }
    }
}
