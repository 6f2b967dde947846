// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-coloured border, a glyph, the message
//! text and a dismiss button. The overlay stacks them oldest first and pins
//! the stack to the configured screen corner.

use super::container::{Container, Message};
use super::notification::{Kind, Notification};
use crate::config::Anchor;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container as Frame, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification, width: f32) -> Element<'_, Message> {
        let style = notification.kind().style();
        let accent = style.accent;

        let glyph = Text::new(style.glyph)
            .size(sizing::GLYPH)
            .style(move |_: &Theme| text::Style {
                color: Some(accent),
            });

        let content = Text::new(notification.content())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss = button(Text::new("✕").size(sizing::DISMISS))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [content] [dismiss]
        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Frame::new(glyph).padding(spacing::XXS))
            .push(
                Frame::new(content)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Frame::new(row)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders every displayed notification, oldest first, in the
    /// container's anchored corner.
    pub fn view_overlay(surface: &Container) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = surface
            .messages()
            .iter()
            .map(|notification| Self::view(notification, surface.width()))
            .collect();

        if toasts.is_empty() {
            return Frame::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (horizontal, vertical) = anchor_alignment(surface.anchor());
        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Frame::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }

    /// Glyph shown for `kind`.
    #[must_use]
    pub fn glyph(kind: Kind) -> &'static str {
        kind.style().glyph
    }
}

fn anchor_alignment(anchor: Anchor) -> (alignment::Horizontal, alignment::Vertical) {
    use alignment::{Horizontal, Vertical};

    match anchor {
        Anchor::TopLeft => (Horizontal::Left, Vertical::Top),
        Anchor::TopRight => (Horizontal::Right, Vertical::Top),
        Anchor::BottomLeft => (Horizontal::Left, Vertical::Bottom),
        Anchor::BottomRight => (Horizontal::Right, Vertical::Bottom),
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_fill = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    let (background, text_color, border) = match status {
        button::Status::Active => (None, base.text, iced::Border::default()),
        button::Status::Hovered => (hover_fill(opacity::OVERLAY_SUBTLE), base.text, rounded),
        button::Status::Pressed => (hover_fill(opacity::OVERLAY_MEDIUM), base.text, rounded),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            iced::Border::default(),
        ),
    };

    button::Style {
        background,
        text_color,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}
