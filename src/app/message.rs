// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::Config;
use crate::ui::notifications::{Kind, NotificationMessage};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the toast container.
    Notification(NotificationMessage),
    /// Raise a toast of this kind through the application's registry.
    Fire(Kind),
    /// Raise a toast through the process-wide registry, which has no
    /// subscriber in this application.
    FireUnregistered,
    /// Remove every toast at once.
    ClearAll,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Loaded configuration.
    pub config: Config,
    /// Problem encountered while loading the configuration, shown as a toast.
    pub config_warning: Option<String>,
    /// Duration applied to every demo toast (`--duration`), in milliseconds.
    pub duration_ms: Option<u64>,
}
