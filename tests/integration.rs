// SPDX-License-Identifier: MPL-2.0
use iced_notify::config::{self, Anchor, Config, ToastConfig};
use iced_notify::ui::notifications::{
    Container, Kind, Notification, NotificationMessage, Registry,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn contents(container: &Container) -> Vec<String> {
    container
        .messages()
        .iter()
        .map(|n| n.content().to_string())
        .collect()
}

#[test]
fn info_scenario_expires_after_its_duration() {
    let registry = Registry::new();
    let (_registration, mut receiver) = registry.channel();
    let mut container = Container::default();
    let start = Instant::now();

    registry.info("Saved", Duration::from_millis(100));
    container.drain(&mut receiver, start);

    assert_eq!(container.len(), 1);
    let shown = &container.messages()[0];
    assert_eq!(shown.kind(), Kind::Info);
    assert_eq!(shown.content(), "Saved");

    container.update_at(
        NotificationMessage::Tick(start + Duration::from_millis(100)),
        start + Duration::from_millis(100),
    );
    assert!(container.is_empty());
}

#[test]
fn calls_keep_their_order() {
    let registry = Registry::new();
    let (_registration, mut receiver) = registry.channel();
    let mut container = Container::default();

    registry.error("A", None);
    registry.success("B", None);
    container.drain(&mut receiver, Instant::now());

    assert_eq!(contents(&container), ["A", "B"]);
}

#[test]
fn dismissed_warning_stays_gone() {
    let registry = Registry::new();
    let (_registration, mut receiver) = registry.channel();
    let mut container = Container::default();
    let start = Instant::now();

    registry.warning("C", Duration::from_millis(5000));
    container.drain(&mut receiver, start);
    let id = container.messages()[0].id();

    let at_10ms = start + Duration::from_millis(10);
    container.update_at(NotificationMessage::Dismiss(id), at_10ms);
    assert!(container.is_empty());

    let at_5s = start + Duration::from_millis(5000);
    container.update_at(NotificationMessage::Tick(at_5s), at_5s);
    assert!(container.is_empty());
    assert!(!container.has_timers());
}

#[test]
fn call_before_registration_produces_nothing() {
    let registry = Registry::new();
    registry.success("x", None);

    let (_registration, mut receiver) = registry.channel();
    let mut container = Container::default();
    assert_eq!(container.drain(&mut receiver, Instant::now()), 0);
    assert!(container.is_empty());
}

#[test]
fn active_count_is_calls_minus_removed() {
    let registry = Registry::new();
    let (_registration, mut receiver) = registry.channel();
    let mut container = Container::default();
    let start = Instant::now();

    for i in 0..10u64 {
        // Even entries expire after 100ms, odd ones use the 3s default.
        let duration = (i % 2 == 0).then(|| Duration::from_millis(100));
        registry.notify(Kind::ALL[(i % 4) as usize], format!("n{i}"), duration);
    }
    container.drain(&mut receiver, start);
    assert_eq!(container.len(), 10);

    let third = container.messages()[3].id();
    container.update_at(NotificationMessage::Dismiss(third), start);
    container.tick(start + Duration::from_millis(100));

    assert_eq!(contents(&container), ["n1", "n5", "n7", "n9"]);
    assert_eq!(container.timers().len(), container.len());
}

#[test]
fn remount_replaces_previous_surface() {
    let registry = Registry::new();
    let (first, mut first_rx) = registry.channel();
    let (_second, mut second_rx) = registry.channel();
    let mut old_surface = Container::default();
    let mut new_surface = Container::default();

    registry.info("after remount", None);
    let now = Instant::now();
    old_surface.drain(&mut first_rx, now);
    new_surface.drain(&mut second_rx, now);

    assert!(old_surface.is_empty());
    assert_eq!(contents(&new_surface), ["after remount"]);

    // Tearing down the old surface must not unsubscribe the new one.
    drop(first);
    assert!(registry.is_registered());
}

#[test]
fn clones_share_the_subscription_slot() {
    let registry = Registry::new();
    let producer = registry.clone();
    let (_registration, mut receiver) = registry.channel();
    let mut container = Container::default();

    producer.warning("from clone", None);
    container.drain(&mut receiver, Instant::now());
    assert_eq!(contents(&container), ["from clone"]);
}

#[tokio::test]
async fn producer_on_another_task_reaches_surface() {
    let registry = Registry::new();
    let (_registration, mut receiver) = registry.channel();

    let producer = registry.clone();
    tokio::spawn(async move {
        producer.success("from task", None);
    })
    .await
    .expect("producer task");

    let update = receiver.recv().await.expect("update delivered");
    let mut container = Container::default();
    container.update(NotificationMessage::Set(update));
    assert_eq!(contents(&container), ["from task"]);
}

#[test]
fn configured_default_duration_drives_expiry() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let config = Config {
        toasts: ToastConfig {
            default_duration_ms: Some(1500),
            anchor: Some(Anchor::BottomRight),
            ..ToastConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let mut container = Container::new(&loaded.toasts);
    assert_eq!(container.anchor(), Anchor::BottomRight);

    let start = Instant::now();
    container.update_at(
        NotificationMessage::Set(iced_notify::ui::notifications::SetMessages::append(
            Notification::info("configured"),
        )),
        start,
    );
    container.tick(start + Duration::from_millis(1499));
    assert_eq!(container.len(), 1);
    container.tick(start + Duration::from_millis(1500));
    assert!(container.is_empty());
}
