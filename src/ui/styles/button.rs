// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled call-to-action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Active => (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM),
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Pressed => (
            Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::PRIMARY_600
            },
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Disabled => return button::Style::default(),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: elevation,
        snap: true,
    }
}
