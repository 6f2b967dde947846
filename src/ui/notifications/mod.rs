// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Producers anywhere in the application raise transient messages through a
//! [`Registry`]; a mounted [`Container`] renders them and removes each one
//! when its timer elapses or the user dismisses it.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `Kind` and `NotificationId`
//! - [`registry`] - `Registry` handle with its single subscription slot
//! - [`timer`] - per-notification dismissal timers
//! - [`container`] - `Container` presentation state, iced update/subscription
//! - [`toast`] - toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_notify::ui::notifications::{Container, NotificationMessage, Registry};
//!
//! let registry = Registry::new();
//! let mut toasts = Container::default();
//!
//! // subscription(): mounts the container on the registry
//! let sub = toasts.subscription(&registry).map(Message::Notification);
//!
//! // anywhere holding a clone of the registry
//! registry.success("Image saved", None);
//!
//! // update(): forward notification messages
//! toasts.update(msg);
//!
//! // view(): stack the overlay over the application content
//! let overlay = toasts.view().map(Message::Notification);
//! ```

pub mod container;
pub mod notification;
pub mod registry;
pub mod timer;
pub mod toast;

pub use container::{Container, Message as NotificationMessage};
pub use notification::{Kind, KindStyle, Notification, NotificationId};
pub use registry::{Registration, Registry, SetMessages};
pub use timer::Timers;
pub use toast::Toast;
