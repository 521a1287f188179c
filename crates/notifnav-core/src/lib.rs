// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// notifnav — Core types, method codec, and error definitions shared by the
// bridge crate.

pub mod codec;
pub mod config;
pub mod error;
pub mod human_errors;
pub mod navigation;
pub mod types;

pub use config::BridgeConfig;
pub use error::NotifNavError;
pub use navigation::{NavigationTarget, select_target};
pub use types::*;
