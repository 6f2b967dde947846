// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Toasts**: display duration, polling interval, width

// ==========================================================================
// Toast Duration Defaults
// ==========================================================================

/// Display time for a toast created without an explicit duration.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Shortest default duration accepted from the config file.
pub const MIN_TOAST_DURATION_MS: u64 = 100;

/// Longest default duration accepted from the config file (one minute).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Timer Polling Defaults
// ==========================================================================

/// How often pending dismissal timers are checked while toasts are shown.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Fastest polling interval accepted from the config file.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Slowest polling interval accepted from the config file.
pub const MAX_TICK_INTERVAL_MS: u64 = 500;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Toast card width in logical pixels.
pub const DEFAULT_TOAST_WIDTH: f32 = 320.0;

/// Narrowest toast width accepted from the config file.
pub const MIN_TOAST_WIDTH: f32 = 160.0;

/// Widest toast width accepted from the config file.
pub const MAX_TOAST_WIDTH: f32 = 800.0;
