// SPDX-License-Identifier: MPL-2.0
//! Per-notification dismissal timers.
//!
//! Timers belong to the presentation surface, not to the notification
//! record. They are reconciled against the displayed list after every
//! change, so a timer exists exactly while its notification is shown.

use super::notification::{Notification, NotificationId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Deadlines past the platform's `Instant` range saturate to this far out.
const LONGEST_DEADLINE: Duration = Duration::from_secs(365 * 24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    duration: Duration,
    deadline: Instant,
}

impl Timer {
    fn start(duration: Duration, now: Instant) -> Self {
        let deadline = now
            .checked_add(duration)
            .or_else(|| now.checked_add(duration.min(LONGEST_DEADLINE)))
            .unwrap_or(now);
        Self { duration, deadline }
    }
}

/// Dismissal deadlines keyed by notification id.
#[derive(Debug, Default)]
pub struct Timers {
    entries: HashMap<NotificationId, Timer>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles timers with the displayed list.
    ///
    /// Starts a timer for each new notification, restarts any timer whose
    /// effective duration changed, and cancels timers whose notification is
    /// no longer displayed.
    pub fn sync(&mut self, messages: &[Notification], default: Duration, now: Instant) {
        self.entries
            .retain(|id, _| messages.iter().any(|n| n.id() == *id));

        for notification in messages {
            let duration = notification.effective_duration(default);
            match self.entries.get(&notification.id()) {
                Some(timer) if timer.duration == duration => {}
                Some(_) => {
                    log::trace!("restarting timer for {}", notification.id());
                    self.entries
                        .insert(notification.id(), Timer::start(duration, now));
                }
                None => {
                    self.entries
                        .insert(notification.id(), Timer::start(duration, now));
                }
            }
        }
    }

    /// Cancels the timer for `id`. Returns `true` if one was pending.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Ids whose deadline is at or before `now`, earliest first.
    #[must_use]
    pub fn expired(&self, now: Instant) -> Vec<NotificationId> {
        let mut due: Vec<(Instant, NotificationId)> = self
            .entries
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (timer.deadline, *id))
            .collect();
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, id)| id).collect()
    }

    /// Deadline of the timer that fires next, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.values().map(|timer| timer.deadline).min()
    }

    /// Deadline of the timer for `id`, if one is pending.
    #[must_use]
    pub fn deadline(&self, id: NotificationId) -> Option<Instant> {
        self.entries.get(&id).map(|timer| timer.deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
