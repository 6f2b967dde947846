// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Container as Toasts, Kind};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a Toasts,
    pub fired: u32,
}

/// Renders the control panel with the toast overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let fire_row = Kind::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, kind| {
        row.push(button(Text::new(kind.as_str())).on_press(Message::Fire(*kind)))
    });

    let controls = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Toast notifications").size(typography::TITLE))
        .push(fire_row)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(button(Text::new("unregistered")).on_press(Message::FireUnregistered))
                .push(button(Text::new("clear")).on_press(Message::ClearAll)),
        )
        .push(
            Text::new(format!(
                "{} raised, {} showing",
                ctx.fired,
                ctx.toasts.len()
            ))
            .size(typography::BODY),
        );

    let content = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(content)
        .push(ctx.toasts.view().map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
