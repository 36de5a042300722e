// SPDX-License-Identifier: MPL-2.0
//! Home screen with a headline, a text block and the "Get Started" button
//! that presents the bottom sheet.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    font,
    widget::{button, container, text, Column, Container, Space},
    Element, Font, Length,
};

const TITLE: &str = "Lorem Ipsum";

const BODY: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Sem fringilla ut morbi tincidunt augue \
interdum. Ut morbi tincidunt augue interdum velit euismod in pellentesque massa. Pulvinar \
etiam non quam lacus suspendisse faucibus interdum posuere. Mi in nulla posuere sollicitudin \
aliquam ultrices sagittis orci a. Eget nullam non nisi est sit amet. Odio pellentesque diam \
volutpat commodo. Id eu nisl nunc mi ipsum faucibus vitae.";

const CALL_TO_ACTION: &str = "Get Started";

/// Messages emitted by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    GetStartedPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    PresentSheet,
}

/// Process a home screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::GetStartedPressed => Event::PresentSheet,
    }
}

/// Render the home screen.
#[must_use]
pub fn view<'a>() -> Element<'a, Message> {
    let title = text(TITLE).size(typography::TITLE_XL).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    });

    let body = text(BODY).size(typography::BODY_LG);

    let call_to_action = button(
        Container::new(text(CALL_TO_ACTION).size(typography::BODY_LG))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CTA_HEIGHT))
    .style(styles::button_primary)
    .on_press(Message::GetStartedPressed);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Left)
        .push(title)
        .push(body)
        .push(Space::new().height(Length::Fill))
        .push(call_to_action);

    container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
