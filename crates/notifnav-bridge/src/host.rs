// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Process-wide channel slot behind the native entry points.
//
// The host may initialise the bridge several times (the activity is
// recreated on rotation or after process restore), and messages can arrive
// before the first initialisation has completed.

use std::sync::RwLock;
use std::thread;

use notifnav_core::codec;
use notifnav_core::error::{NotifNavError, Result};

use crate::channel::{MethodChannel, error_response};

/// Reply used when even the error envelope cannot be encoded. Never empty,
/// since an empty reply means "not implemented" to the UI layer.
pub const FALLBACK_ERROR_REPLY: &[u8] = br#"["BRIDGE","",null]"#;

/// Holds the channel installed by the host.
pub struct ChannelSlot {
    channel: RwLock<Option<MethodChannel>>,
}

impl ChannelSlot {
    pub const fn new() -> Self {
        Self {
            channel: RwLock::new(None),
        }
    }

    /// Install `channel`, dropping any earlier one. Returns `true` if a
    /// channel was replaced.
    pub fn install_channel(&self, channel: MethodChannel) -> Result<bool> {
        let mut slot = self
            .channel
            .write()
            .map_err(|_| NotifNavError::Bridge("channel lock poisoned".into()))?;
        let replaced = slot.replace(channel).is_some();
        if replaced {
            tracing::info!("bridge re-initialised; previous channel dropped");
        }
        Ok(replaced)
    }

    /// Route one encoded message through the installed channel.
    pub fn handle_bytes(&self, message: &[u8]) -> Result<Vec<u8>> {
        let slot = self
            .channel
            .read()
            .map_err(|_| NotifNavError::Bridge("channel lock poisoned".into()))?;
        let channel = slot
            .as_ref()
            .ok_or_else(|| NotifNavError::Bridge("nativeInit has not been called".into()))?;
        channel.handle_message(message)
    }
}

impl Default for ChannelSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the error envelope for `err`, falling back to
/// [`FALLBACK_ERROR_REPLY`].
pub fn error_reply(err: &NotifNavError) -> Vec<u8> {
    codec::encode_response(&error_response(err)).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to encode error envelope");
        FALLBACK_ERROR_REPLY.to_vec()
    })
}

/// Turn the caught outcome of an init call into the JNI boolean result.
pub fn init_succeeded(outcome: thread::Result<Result<()>>) -> bool {
    match outcome {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "bridge initialisation failed");
            false
        }
        Err(_) => {
            tracing::error!("bridge initialisation panicked");
            false
        }
    }
}

/// Turn the caught outcome of a message call into reply bytes. Failures
/// and panics always produce an error envelope.
pub fn reply_for(outcome: thread::Result<Result<Vec<u8>>>) -> Vec<u8> {
    match outcome {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "message handling failed");
            error_reply(&e)
        }
        Err(_) => {
            tracing::error!("message handling panicked");
            error_reply(&NotifNavError::Bridge(
                "panic while handling method call".into(),
            ))
        }
    }
}
