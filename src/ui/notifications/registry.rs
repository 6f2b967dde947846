// SPDX-License-Identifier: MPL-2.0
//! Notification registry: the entry point producers use to raise toasts.
//!
//! The registry holds a single subscription slot. Whichever presentation
//! surface registered last receives every list update; earlier surfaces are
//! replaced outright and get no replay of history. Updates are expressed as
//! [`SetMessages`], a whole-list replacement computed from the previous list,
//! so a subscriber never observes a partially edited list.
//!
//! ```
//! use iced_notify::ui::notifications::{Registry, SetMessages};
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//!
//! let registry = Registry::new();
//! let shown = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&shown);
//! let _registration = registry.register_set_messages(move |update: SetMessages| {
//!     let mut list = sink.lock();
//!     *list = update.apply(&list);
//! });
//!
//! registry.success("Saved", None);
//! assert_eq!(shown.lock().len(), 1);
//! ```

use super::notification::{Kind, Notification, NotificationId};
use parking_lot::Mutex;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock, Weak};
use std::time::Duration;
use tokio::sync::mpsc;

type Updater = dyn Fn(&[Notification]) -> Vec<Notification> + Send + Sync;
type Setter = dyn Fn(SetMessages) + Send + Sync;

/// The next list of notifications, either given literally or derived from
/// the previous list.
#[derive(Clone)]
pub enum SetMessages {
    /// Replace the list with this one.
    Replace(Vec<Notification>),
    /// Compute the next list from the previous one.
    Update(Arc<Updater>),
}

impl SetMessages {
    pub fn update<F>(f: F) -> Self
    where
        F: Fn(&[Notification]) -> Vec<Notification> + Send + Sync + 'static,
    {
        Self::Update(Arc::new(f))
    }

    /// Appends `notification` after every existing entry.
    pub fn append(notification: Notification) -> Self {
        Self::update(move |prev| {
            let mut next = Vec::with_capacity(prev.len() + 1);
            next.extend_from_slice(prev);
            next.push(notification.clone());
            next
        })
    }

    /// Filters out the notification with `id`. Absent ids leave the list as is.
    pub fn remove(id: NotificationId) -> Self {
        Self::update(move |prev| prev.iter().filter(|n| n.id() != id).cloned().collect())
    }

    /// Produces the next list. `prev` is never modified.
    #[must_use]
    pub fn apply(&self, prev: &[Notification]) -> Vec<Notification> {
        match self {
            SetMessages::Replace(list) => list.clone(),
            SetMessages::Update(f) => f(prev),
        }
    }
}

impl fmt::Debug for SetMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetMessages::Replace(list) => f.debug_tuple("Replace").field(list).finish(),
            SetMessages::Update(_) => f.write_str("Update(..)"),
        }
    }
}

#[derive(Default)]
struct Slot {
    setter: Option<Arc<Setter>>,
    /// Bumped on every registration so stale tokens can be told apart.
    generation: u64,
}

/// Shared handle to the notification registry.
///
/// Cloning is cheap and every clone addresses the same subscription slot.
/// Construct one at the composition root and pass it to producers, or use
/// [`Registry::global`] where no such root exists.
#[derive(Clone, Default)]
pub struct Registry {
    slot: Arc<Mutex<Slot>>,
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

impl Registry {
    /// Creates a registry with an empty subscription slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry, creating it on first access.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Makes `setter` the active subscriber, replacing any previous one.
    ///
    /// Only updates issued after this call reach `setter`. The slot stays
    /// occupied until the returned [`Registration`] is dropped or a later
    /// registration takes its place.
    pub fn register_set_messages<F>(&self, setter: F) -> Registration
    where
        F: Fn(SetMessages) + Send + Sync + 'static,
    {
        let (generation, previous) = {
            let mut slot = self.slot.lock();
            slot.generation += 1;
            let previous = slot.setter.replace(Arc::new(setter));
            (slot.generation, previous)
        };
        if previous.is_some() {
            log::debug!("notification subscriber replaced (generation {generation})");
        } else {
            log::debug!("notification subscriber registered (generation {generation})");
        }
        Registration {
            slot: Arc::downgrade(&self.slot),
            generation,
        }
    }

    /// Registers a subscriber that forwards every update into a channel.
    ///
    /// This is how a surface living on another task consumes updates.
    pub fn channel(&self) -> (Registration, mpsc::UnboundedReceiver<SetMessages>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let registration = self.register_set_messages(move |update| {
            if tx.send(update).is_err() {
                log::debug!("notification surface closed, update dropped");
            }
        });
        (registration, rx)
    }

    /// Returns whether a subscriber currently occupies the slot.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.slot.lock().setter.is_some()
    }

    pub fn success(&self, content: impl Into<String>, duration: impl Into<Option<Duration>>) {
        self.notify(Kind::Success, content, duration);
    }

    pub fn error(&self, content: impl Into<String>, duration: impl Into<Option<Duration>>) {
        self.notify(Kind::Error, content, duration);
    }

    pub fn info(&self, content: impl Into<String>, duration: impl Into<Option<Duration>>) {
        self.notify(Kind::Info, content, duration);
    }

    pub fn warning(&self, content: impl Into<String>, duration: impl Into<Option<Duration>>) {
        self.notify(Kind::Warning, content, duration);
    }

    /// Appends a new notification of `kind` to the subscriber's list.
    ///
    /// Without a subscriber the call is logged and dropped.
    pub fn notify(
        &self,
        kind: Kind,
        content: impl Into<String>,
        duration: impl Into<Option<Duration>>,
    ) {
        // Cloned out so the setter runs without the slot locked.
        let setter = self.slot.lock().setter.clone();
        let Some(setter) = setter else {
            log::error!("notification registry not initialized, dropping {kind} notification");
            return;
        };
        let notification = Notification::new(kind, content, duration.into());
        log::trace!("appending {kind} notification {}", notification.id());
        setter(SetMessages::append(notification));
    }

    /// Identity of the underlying slot, shared by every clone.
    fn key(&self) -> usize {
        Arc::as_ptr(&self.slot) as usize
    }
}

/// Registries compare by slot identity: clones are equal, separately
/// created registries are not.
impl PartialEq for Registry {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for Registry {}

impl Hash for Registry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("registered", &self.is_registered())
            .finish()
    }
}

/// Token for an occupied subscription slot.
///
/// Dropping it (or calling [`Registration::unsubscribe`]) empties the slot,
/// unless a newer registration has already replaced this one.
#[must_use = "dropping a Registration unsubscribes immediately"]
#[derive(Debug)]
pub struct Registration {
    slot: Weak<Mutex<Slot>>,
    generation: u64,
}

impl Registration {
    /// Returns whether this registration still owns the slot.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.slot.upgrade().is_some_and(|slot| {
            let slot = slot.lock();
            slot.generation == self.generation && slot.setter.is_some()
        })
    }

    /// Empties the slot if this registration still owns it.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let Some(slot) = self.slot.upgrade() else {
            return;
        };
        let removed = {
            let mut slot = slot.lock();
            if slot.generation == self.generation {
                slot.setter.take()
            } else {
                None
            }
        };
        if removed.is_some() {
            log::debug!("notification subscriber unregistered (generation {})", self.generation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Subscriber that applies every update to a shared list.
    fn holder(registry: &Registry) -> (Registration, Arc<Mutex<Vec<Notification>>>) {
        let list = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&list);
        let registration = registry.register_set_messages(move |update| {
            let mut list = sink.lock();
            *list = update.apply(&list);
        });
        (registration, list)
    }

    fn contents(list: &Mutex<Vec<Notification>>) -> Vec<String> {
        list.lock().iter().map(|n| n.content().to_string()).collect()
    }

    #[test]
    fn global_returns_same_instance() {
        assert_eq!(Registry::global().key(), Registry::global().key());
    }

    fn hash_of(registry: &Registry) -> u64 {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        registry.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn clones_share_identity_and_separate_registries_differ() {
        let registry = Registry::new();
        let clone = registry.clone();
        let other = Registry::new();

        assert_eq!(registry, clone);
        assert_eq!(hash_of(&registry), hash_of(&clone));
        assert_ne!(registry, other);
        assert_ne!(hash_of(&registry), hash_of(&other));
    }

    #[test]
    fn calls_before_registration_are_dropped() {
        let registry = Registry::new();
        registry.success("x", None);
        assert!(!registry.is_registered());

        let (_registration, list) = holder(&registry);
        assert!(list.lock().is_empty(), "no replay of dropped calls");
    }

    #[test]
    fn creation_methods_append_in_call_order_with_kind() {
        let registry = Registry::new();
        let (_registration, list) = holder(&registry);

        registry.error("A", None);
        registry.success("B", None);
        registry.info("C", Duration::from_millis(100));
        registry.warning("D", Some(Duration::from_millis(5000)));

        let list = list.lock();
        let kinds: Vec<Kind> = list.iter().map(Notification::kind).collect();
        assert_eq!(kinds, [Kind::Error, Kind::Success, Kind::Info, Kind::Warning]);
        assert_eq!(list[2].duration(), Some(Duration::from_millis(100)));
        assert_eq!(list[0].duration(), None);
    }

    #[test]
    fn newer_registration_replaces_older() {
        let registry = Registry::new();
        let (_first, first_list) = holder(&registry);
        let (_second, second_list) = holder(&registry);

        registry.info("only second", None);

        assert!(first_list.lock().is_empty());
        assert_eq!(contents(&second_list), ["only second"]);
    }

    #[test]
    fn stale_registration_drop_keeps_newer_subscriber() {
        let registry = Registry::new();
        let (first, _) = holder(&registry);
        let (second, second_list) = holder(&registry);

        assert!(!first.is_active());
        drop(first);
        assert!(registry.is_registered());
        assert!(second.is_active());

        registry.info("still delivered", None);
        assert_eq!(contents(&second_list), ["still delivered"]);
    }

    #[test]
    fn unsubscribe_empties_slot() {
        let registry = Registry::new();
        let (registration, list) = holder(&registry);
        registration.unsubscribe();

        assert!(!registry.is_registered());
        registry.info("dropped", None);
        assert!(list.lock().is_empty());
    }

    #[test]
    fn remove_absent_id_returns_list_unchanged() {
        let list = vec![Notification::info("a"), Notification::info("b")];
        let absent = Notification::info("gone").id();
        assert_eq!(SetMessages::remove(absent).apply(&list), list);
    }

    #[test]
    fn remove_keeps_order_of_remaining() {
        let list = vec![
            Notification::info("a"),
            Notification::info("b"),
            Notification::info("c"),
        ];
        let next = SetMessages::remove(list[1].id()).apply(&list);
        let names: Vec<&str> = next.iter().map(Notification::content).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(list.len(), 3, "previous list untouched");
    }

    #[test]
    fn replace_ignores_previous_list() {
        let prev = vec![Notification::info("old")];
        let fresh = vec![Notification::success("new")];
        assert_eq!(SetMessages::Replace(fresh.clone()).apply(&prev), fresh);
    }

    #[test]
    fn setter_may_reenter_registry() {
        let registry = Registry::new();
        let inner = registry.clone();
        let _registration = registry.register_set_messages(move |_| {
            let _ = inner.is_registered();
        });
        registry.info("no deadlock", None);
    }

    #[test]
    fn channel_forwards_updates() {
        let registry = Registry::new();
        let (_registration, mut rx) = registry.channel();
        registry.warning("queued", None);

        let update = rx.try_recv().expect("update forwarded");
        let list = update.apply(&[]);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind(), Kind::Warning);
    }

    #[test]
    fn channel_with_closed_receiver_does_not_panic() {
        let registry = Registry::new();
        let (_registration, rx) = registry.channel();
        drop(rx);
        registry.error("nobody listening", None);
    }
}
