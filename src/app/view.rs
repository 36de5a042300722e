// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The home screen is always rendered; a presented sheet is stacked on top
//! of it and covers the whole window.

use super::Message;
use crate::ui::home;
use crate::ui::sheet::ModalHost;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub host: &'a ModalHost,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let home = home::view().map(Message::Home);

    match ctx.host.view() {
        Some(sheet) => Stack::new()
            .push(home)
            .push(sheet.map(Message::Sheet))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => home,
    }
}
