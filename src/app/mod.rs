// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring a `Registry` to a toast `Container`.
//!
//! The registry is created here, at the composition root, and handed to the
//! container's subscription. Every producer in the application holds a clone
//! of the same handle.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::ui::notifications::{
    Container as Toasts, Notification, NotificationMessage, Registry, SetMessages,
};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root application state.
pub struct App {
    registry: Registry,
    toasts: Toasts,
    theme_mode: ThemeMode,
    /// Duration applied to toasts raised from the control panel.
    duration: Option<Duration>,
    /// Number of toasts raised so far, used to label them.
    fired: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("fired", &self.fired)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            registry: Registry::new(),
            toasts: Toasts::default(),
            theme_mode: ThemeMode::default(),
            duration: None,
            fired: 0,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App {
            toasts: Toasts::new(&flags.config.toasts),
            theme_mode: flags.config.general.theme_mode,
            duration: flags.duration_ms.map(Duration::from_millis),
            ..Self::default()
        };

        // The registry has no subscriber until the first subscription runs,
        // so the warning goes straight into the container.
        if let Some(warning) = flags.config_warning {
            log::warn!("{warning}");
            app.toasts
                .update(NotificationMessage::Set(SetMessages::append(
                    Notification::warning(warning),
                )));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Iced Notify".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts
            .subscription(&self.registry)
            .map(Message::Notification)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.toasts.update(notification_message);
            }
            Message::Fire(kind) => {
                self.fired += 1;
                self.registry
                    .notify(kind, format!("{kind} #{}", self.fired), self.duration);
            }
            Message::FireUnregistered => {
                Registry::global().info("this toast is never shown", None);
            }
            Message::ClearAll => {
                self.toasts.clear();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            fired: self.fired,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::notifications::Kind;

    #[test]
    fn config_warning_is_shown_as_warning_toast() {
        let (app, _) = App::new(Flags {
            config: Config::default(),
            config_warning: Some("bad settings".to_string()),
            duration_ms: None,
        });

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts.messages()[0].kind(), Kind::Warning);
        assert_eq!(app.toasts.messages()[0].content(), "bad settings");
    }

    #[test]
    fn fire_without_mounted_surface_is_dropped() {
        let mut app = App::default();
        let _ = app.update(Message::Fire(Kind::Success));

        assert_eq!(app.fired, 1);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn fire_reaches_container_through_registry() {
        let mut app = App::new(Flags {
            duration_ms: Some(250),
            ..Flags::default()
        })
        .0;
        let (_registration, mut receiver) = app.registry.channel();

        let _ = app.update(Message::Fire(Kind::Error));
        let _ = app.update(Message::Fire(Kind::Info));
        app.toasts.drain(&mut receiver, std::time::Instant::now());

        let labels: Vec<&str> = app.toasts.messages().iter().map(|n| n.content()).collect();
        assert_eq!(labels, ["error #1", "info #2"]);
        assert_eq!(
            app.toasts.messages()[0].duration(),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn unregistered_fire_leaves_state_untouched() {
        let mut app = App::default();
        let _ = app.update(Message::FireUnregistered);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn clear_all_empties_container() {
        let mut app = App::default();
        let (_registration, mut receiver) = app.registry.channel();
        let _ = app.update(Message::Fire(Kind::Warning));
        app.toasts.drain(&mut receiver, std::time::Instant::now());
        assert_eq!(app.toasts.len(), 1);

        let _ = app.update(Message::ClearAll);
        assert!(app.toasts.is_empty());
        assert!(!app.toasts.has_timers());
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let (app, _) = App::new(Flags {
            config,
            ..Flags::default()
        });
        assert_eq!(app.theme(), Theme::Light);
    }
}
