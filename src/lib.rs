// SPDX-License-Identifier: MPL-2.0
//! `iced_sheet` is a small demo of a modal bottom sheet built with the Iced
//! GUI framework.
//!
//! A home screen presents a sheet that slides up over a dimmed backdrop. The
//! sheet can be resized by dragging its panel and dismissed by dragging it
//! down, tapping the backdrop or pressing Escape. The presentation logic is a
//! pure state machine in [`domain::sheet`]; [`ui::sheet`] renders it.

#![doc(html_root_url = "https://docs.rs/iced_sheet/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod ui;
