// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. The host activity loads this library and calls
// `nativeInit` once from `configureFlutterEngine`, then forwards every
// message arriving on the `com.app.notification_settings` channel to
// `nativeHandle` and replies with the returned bytes.
//
// Kotlin side:
//
//   package com.app.notification_settings
//   object NotificationSettingsBridge {
//       external fun nativeInit(activity: Activity, configJson: String?): Boolean
//       external fun nativeHandle(message: ByteArray): ByteArray
//   }

#![cfg(target_os = "android")]

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr;
use std::sync::Arc;

use jni::objects::{GlobalRef, JByteArray, JClass, JObject, JString, JValue};
use jni::sys::{JNI_FALSE, JNI_TRUE, jboolean, jbyteArray};
use jni::{AttachGuard, JNIEnv, JavaVM};

use notifnav_core::error::{NotifNavError, Result};
use notifnav_core::{BridgeConfig, NavigationTarget, PlatformDescriptor};

use crate::host::{ChannelSlot, init_succeeded, reply_for};
use crate::traits::*;

// ---------------------------------------------------------------------------
// JNI helpers
// ---------------------------------------------------------------------------

/// Channel installed by `nativeInit`. Replaced when the activity is recreated.
static CHANNEL: ChannelSlot = ChannelSlot::new();

/// Take and clear a pending Java exception, returning its `toString()`.
///
/// Any JNI call made while an exception is pending aborts the VM, so this
/// must run before the next call on `env`.
fn take_exception(env: &mut JNIEnv<'_>) -> Option<String> {
    if !env.exception_check().unwrap_or(false) {
        return None;
    }
    let throwable = env.exception_occurred().ok()?;
    env.exception_clear().ok()?;
    let text: JObject = env
        .call_method(&throwable, "toString", "()Ljava/lang/String;", &[])
        .ok()?
        .l()
        .ok()?;
    env.get_string(&JString::from(text)).ok().map(Into::into)
}

/// Map a `jni::errors::Error` into `NotifNavError::Bridge`, clearing any
/// pending Java exception.
fn jni_err(env: &mut JNIEnv<'_>, context: &str, e: jni::errors::Error) -> NotifNavError {
    match take_exception(env) {
        Some(exception) => NotifNavError::Bridge(format!("{context}: {exception}")),
        None => NotifNavError::Bridge(format!("{context}: {e}")),
    }
}

/// Like [`jni_err`] but for the final `startActivity` hand-off.
fn launch_err(env: &mut JNIEnv<'_>, action: &str, e: jni::errors::Error) -> NotifNavError {
    NotifNavError::Launch {
        action: action.to_owned(),
        reason: take_exception(env).unwrap_or_else(|| e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the platform bridge.
///
/// Keeps the `JavaVM` and a global reference to the hosting activity so it
/// can be called from any thread.
pub struct AndroidBridge {
    vm: JavaVM,
    activity: GlobalRef,
}

impl AndroidBridge {
    /// Build a bridge from the environment and activity of a JNI call.
    pub fn new(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<Self> {
        if activity.is_null() {
            return Err(NotifNavError::Bridge("activity is null".into()));
        }
        let vm = env
            .get_java_vm()
            .map_err(|e| NotifNavError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
        let activity = env
            .new_global_ref(activity)
            .map_err(|e| NotifNavError::Bridge(format!("new_global_ref(activity): {e}")))?;
        Ok(Self { vm, activity })
    }

    /// Build a bridge from the global NDK context (NativeActivity hosts).
    pub fn from_ndk_context() -> Result<Self> {
        let ctx = ndk_context::android_context();
        if ctx.context().is_null() {
            return Err(NotifNavError::Bridge(
                "Android context is null; native activity not initialised".into(),
            ));
        }
        // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
        // The pointer is valid for the lifetime of the process.
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
            .map_err(|e| NotifNavError::Bridge(format!("failed to obtain JavaVM: {e}")))?;
        let activity = {
            let env = vm
                .attach_current_thread()
                .map_err(|e| NotifNavError::Bridge(format!("failed to attach JNI thread: {e}")))?;
            // SAFETY: the NDK guarantees this pointer is a valid global
            // jobject for the hosting activity.
            let context = unsafe { JObject::from_raw(ctx.context().cast()) };
            env.new_global_ref(&context)
                .map_err(|e| NotifNavError::Bridge(format!("new_global_ref(context): {e}")))?
        };
        Ok(Self { vm, activity })
    }

    fn attach(&self) -> Result<AttachGuard<'_>> {
        self.vm
            .attach_current_thread()
            .map_err(|e| NotifNavError::Bridge(format!("failed to attach JNI thread: {e}")))
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// PlatformInfo — Build.VERSION + Context.getPackageName()
// ---------------------------------------------------------------------------

impl PlatformInfo for AndroidBridge {
    fn descriptor(&self) -> Result<PlatformDescriptor> {
        let mut env = self.attach()?;

        let sdk_int = env
            .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
            .map_err(|e| jni_err(&mut env, "Build.VERSION.SDK_INT", e))?
            .i()
            .map_err(|e| jni_err(&mut env, "SDK_INT->i", e))?;
        let sdk_int = u32::try_from(sdk_int)
            .map_err(|_| NotifNavError::Bridge(format!("negative SDK_INT: {sdk_int}")))?;

        let j_pkg: JObject = env
            .call_method(
                self.activity.as_obj(),
                "getPackageName",
                "()Ljava/lang/String;",
                &[],
            )
            .map_err(|e| jni_err(&mut env, "getPackageName", e))?
            .l()
            .map_err(|e| jni_err(&mut env, "getPackageName->l", e))?;

        let package_name: String = env
            .get_string(&JString::from(j_pkg))
            .map_err(|e| jni_err(&mut env, "get_string(packageName)", e))?
            .into();

        tracing::debug!(sdk_int, package = %package_name, "Android: read platform descriptor");
        Ok(PlatformDescriptor::new(sdk_int, package_name))
    }
}

// ---------------------------------------------------------------------------
// NavigationLauncher — Intent + startActivity
// ---------------------------------------------------------------------------

impl NavigationLauncher for AndroidBridge {
    /// Build the settings intent and hand it to `Activity.startActivity`.
    ///
    /// Returns as soon as the system accepts the intent. A missing settings
    /// activity (`ActivityNotFoundException`) comes back as
    /// `NotifNavError::Launch`.
    fn launch(&self, target: &NavigationTarget) -> Result<()> {
        let mut env = self.attach()?;
        let action = target.action();

        let j_action: JString = env
            .new_string(action)
            .map_err(|e| jni_err(&mut env, "new_string(action)", e))?;

        let intent: JObject = env
            .new_object(
                "android/content/Intent",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&j_action)],
            )
            .map_err(|e| jni_err(&mut env, "new Intent", e))?;

        // intent.putExtra(key, value) for each string extra
        for (key, value) in target.extras() {
            let j_key: JString = env
                .new_string(key)
                .map_err(|e| jni_err(&mut env, "new_string(extra key)", e))?;
            let j_value: JString = env
                .new_string(value)
                .map_err(|e| jni_err(&mut env, "new_string(extra value)", e))?;
            env.call_method(
                &intent,
                "putExtra",
                "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
                &[JValue::Object(&j_key), JValue::Object(&j_value)],
            )
            .map_err(|e| jni_err(&mut env, "putExtra", e))?;
        }

        // intent.setData(Uri.parse("package:<id>"))
        if let Some(uri) = target.data_uri() {
            let j_uri_str: JString = env
                .new_string(&uri)
                .map_err(|e| jni_err(&mut env, "new_string(uri)", e))?;
            let uri_obj: JObject = env
                .call_static_method(
                    "android/net/Uri",
                    "parse",
                    "(Ljava/lang/String;)Landroid/net/Uri;",
                    &[JValue::Object(&j_uri_str)],
                )
                .map_err(|e| jni_err(&mut env, "Uri.parse", e))?
                .l()
                .map_err(|e| jni_err(&mut env, "Uri.parse->l", e))?;
            env.call_method(
                &intent,
                "setData",
                "(Landroid/net/Uri;)Landroid/content/Intent;",
                &[JValue::Object(&uri_obj)],
            )
            .map_err(|e| jni_err(&mut env, "setData", e))?;
        }

        env.call_method(
            self.activity.as_obj(),
            "startActivity",
            "(Landroid/content/Intent;)V",
            &[JValue::Object(&intent)],
        )
        .map_err(|e| launch_err(&mut env, action, e))?;

        tracing::info!(action, "Android: settings intent dispatched");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// JNI exports
// ---------------------------------------------------------------------------

fn init(env: &mut JNIEnv<'_>, activity: &JObject<'_>, config: &JString<'_>) -> Result<()> {
    let raw: String = if config.is_null() {
        String::new()
    } else {
        env.get_string(config)
            .map_err(|e| jni_err(env, "get_string(configJson)", e))?
            .into()
    };
    let config = BridgeConfig::from_json(&raw)?;
    crate::logging::init_logging(&config);

    let bridge = AndroidBridge::new(env, activity)?;
    let channel = crate::build_channel(&config, Arc::new(bridge));

    CHANNEL.install_channel(channel)?;
    Ok(())
}

fn handle(env: &mut JNIEnv<'_>, message: &JByteArray<'_>) -> Result<Vec<u8>> {
    let bytes = env
        .convert_byte_array(message)
        .map_err(|e| jni_err(env, "convert_byte_array(message)", e))?;
    CHANNEL.handle_bytes(&bytes)
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_app_notification_1settings_NotificationSettingsBridge_nativeInit(
    mut env: JNIEnv,
    _class: JClass,
    activity: JObject,
    config_json: JString,
) -> jboolean {
    let outcome = catch_unwind(AssertUnwindSafe(|| init(&mut env, &activity, &config_json)));
    if init_succeeded(outcome) {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_app_notification_1settings_NotificationSettingsBridge_nativeHandle(
    mut env: JNIEnv,
    _class: JClass,
    message: JByteArray,
) -> jbyteArray {
    let outcome = catch_unwind(AssertUnwindSafe(|| handle(&mut env, &message)));
    let reply = reply_for(outcome);

    match env.byte_array_from_slice(&reply) {
        Ok(array) => array.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}
