// SPDX-License-Identifier: MPL-2.0
//! Presentation surface for notifications.
//!
//! The `Container` holds the displayed list, replacing it wholesale on every
//! change, and owns one dismissal timer per displayed notification. It
//! subscribes to a [`Registry`] while its iced subscription is running and
//! unsubscribes when iced drops that subscription.

use super::notification::{Notification, NotificationId};
use super::registry::{Registry, SetMessages};
use super::timer::Timers;
use super::toast::Toast;
use crate::config::{Anchor, ToastConfig};
use iced::futures::SinkExt;
use iced::{stream, time, Element, Subscription};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The registry produced the next list.
    Set(SetMessages),
    /// The user dismissed a notification.
    Dismiss(NotificationId),
    /// Periodic check of dismissal timers.
    Tick(Instant),
}

/// Displayed notifications and their dismissal timers.
#[derive(Debug)]
pub struct Container {
    /// Displayed notifications, oldest first.
    messages: Vec<Notification>,
    timers: Timers,
    default_duration: Duration,
    tick_interval: Duration,
    anchor: Anchor,
    width: f32,
}

impl Default for Container {
    fn default() -> Self {
        Self::new(&ToastConfig::default())
    }
}

impl Container {
    /// Creates an empty container using the toast settings.
    #[must_use]
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            messages: Vec::new(),
            timers: Timers::new(),
            default_duration: config.default_duration(),
            tick_interval: config.tick_interval(),
            anchor: config.anchor(),
            width: config.width(),
        }
    }

    /// Handles a notification message at the current instant.
    pub fn update(&mut self, message: Message) {
        self.update_at(message, Instant::now());
    }

    /// Handles a notification message as if it arrived at `now`.
    ///
    /// `Tick` carries its own instant and ignores `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) {
        match message {
            Message::Set(update) => self.set_messages(&update, now),
            Message::Dismiss(id) => {
                self.dismiss_at(id, now);
            }
            Message::Tick(at) => self.tick(at),
        }
    }

    /// Applies every update waiting in `receiver`. Returns how many were applied.
    pub fn drain(
        &mut self,
        receiver: &mut mpsc::UnboundedReceiver<SetMessages>,
        now: Instant,
    ) -> usize {
        let mut applied = 0;
        while let Ok(update) = receiver.try_recv() {
            self.set_messages(&update, now);
            applied += 1;
        }
        applied
    }

    /// Removes `id` and cancels its timer.
    ///
    /// Returns `true` if the notification was displayed. Dismissing an id
    /// that is already gone leaves the list unchanged.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        self.timers.cancel(id);
        let before = self.messages.len();
        self.set_messages(&SetMessages::remove(id), now);
        self.messages.len() < before
    }

    /// Removes every notification whose timer has elapsed at `now`.
    pub fn tick(&mut self, now: Instant) {
        for id in self.timers.expired(now) {
            log::trace!("notification {id} expired");
            self.dismiss_at(id, now);
        }
    }

    /// Changes the duration used by notifications without their own.
    ///
    /// Pending timers affected by the change restart from `now`.
    pub fn set_default_duration(&mut self, duration: Duration, now: Instant) {
        self.default_duration = duration;
        self.timers.sync(&self.messages, self.default_duration, now);
    }

    /// Drops every notification and cancels every timer.
    pub fn clear(&mut self) {
        self.messages = Vec::new();
        self.timers.clear();
    }

    fn set_messages(&mut self, update: &SetMessages, now: Instant) {
        self.messages = update.apply(&self.messages);
        self.timers.sync(&self.messages, self.default_duration, now);
    }

    /// Returns the displayed notifications, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[Notification] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Returns whether any dismissal timer is pending.
    #[must_use]
    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Renders the anchored toast stack.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(self)
    }

    /// Mounts the container on `registry`.
    ///
    /// While the returned subscription runs, this container is the
    /// registry's subscriber. Timer ticks are only produced while at least
    /// one timer is pending.
    pub fn subscription(&self, registry: &Registry) -> Subscription<Message> {
        // Keyed by registry identity: one running stream per registry.
        let updates = Subscription::run_with(registry.clone(), |registry| {
            let registry = registry.clone();
            stream::channel(100, move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                let (_registration, mut receiver) = registry.channel();

                // Ends when a newer subscriber replaces this one.
                while let Some(update) = receiver.recv().await {
                    if output.send(Message::Set(update)).await.is_err() {
                        break;
                    }
                }
                log::debug!("notification surface detached from registry");
            })
        });

        let ticks = if self.has_timers() {
            time::every(self.tick_interval).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([updates, ticks])
    }
}
