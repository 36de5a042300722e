// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use iced::widget::container;
use iced::{Background, Theme};

/// Full-window page surface taken from the active theme background.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}
