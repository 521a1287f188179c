// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Logging setup.

use notifnav_core::BridgeConfig;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `config.log_filter`. Returns `false` if a subscriber
/// was already installed (the host may initialise the bridge more than once
/// across activity restarts).
pub fn init_logging(config: &BridgeConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_ansi(false)
        .try_init()
        .is_ok()
}
