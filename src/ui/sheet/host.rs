// SPDX-License-Identifier: MPL-2.0
//! Owner of the currently presented sheet.
//!
//! At most one sheet is presented at a time. A second presentation request
//! while a sheet is on screen is ignored.

use super::{Event, Message, State};
use crate::domain::sheet::{Sheet, SheetConfig};
use crate::error::Result;
use crate::ui::theming::ColorScheme;
use iced::{Element, Size, Task};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ModalHost {
    active: Option<State>,
}

impl ModalHost {
    /// Mounts a new sheet sized for `viewport` and schedules its entrance.
    ///
    /// # Errors
    ///
    /// Returns an error when `config` describes invalid height bounds.
    pub fn present(
        &mut self,
        config: SheetConfig,
        colors: ColorScheme,
        corner_radius: f32,
        viewport: Size,
    ) -> Result<Task<Message>> {
        if self.active.is_some() {
            log::warn!("A sheet is already presented; ignoring request");
            return Ok(Task::none());
        }

        let sheet = Sheet::new(config, viewport.height)?;
        log::info!(
            "Presenting sheet (default {}, maximum {})",
            sheet.geometry().default_height(),
            sheet.geometry().maximum_height()
        );
        self.active = Some(State::new(sheet, colors, corner_radius, Some(viewport)));
        Ok(Task::done(Message::Appeared))
    }

    /// Forwards a message to the presented sheet and unmounts it once it
    /// reports removal. Returns `true` when the sheet was removed.
    pub fn handle(&mut self, message: Message, now: Instant) -> bool {
        let Some(sheet) = self.active.as_mut() else {
            return false;
        };
        match sheet.handle(message, now) {
            Event::Removed => {
                self.active = None;
                log::info!("Sheet dismissed");
                true
            }
            Event::None => false,
        }
    }

    /// Drops the presented sheet immediately, skipping its exit animation.
    /// Returns `true` if a sheet was presented.
    pub fn dismiss(&mut self) -> bool {
        let dismissed = self.active.take().is_some();
        if dismissed {
            log::info!("Sheet removed without animation");
        }
        dismissed
    }

    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.as_ref().is_some_and(State::is_animating)
    }

    #[must_use]
    pub fn active(&self) -> Option<&State> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> Option<Element<'_, Message>> {
        self.active.as_ref().map(State::view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sheet::Phase;
    use std::time::Duration;

    const VIEWPORT: Size = Size::new(400.0, 800.0);

    fn present(host: &mut ModalHost) {
        let _task = host
            .present(SheetConfig::default(), ColorScheme::light(), 16.0, VIEWPORT)
            .expect("default config is valid");
    }

    #[test]
    fn present_mounts_a_sheet() {
        let mut host = ModalHost::default();
        assert!(!host.is_presenting());
        present(&mut host);
        assert!(host.is_presenting());
        let sheet = host.active().expect("sheet mounted");
        assert_eq!(sheet.phase(), Phase::Initializing);
        assert_eq!(sheet.sheet().geometry().maximum_height(), 736.0);
    }

    #[test]
    fn second_present_is_ignored() {
        let mut host = ModalHost::default();
        present(&mut host);
        let now = Instant::now();
        host.handle(Message::Appeared, now);
        present(&mut host);
        assert_eq!(host.active().map(State::phase), Some(Phase::Presenting));
    }

    #[test]
    fn dismissal_unmounts_after_exit_animation() {
        let mut host = ModalHost::default();
        present(&mut host);
        let start = Instant::now();
        host.handle(Message::Appeared, start);
        assert!(!host.handle(Message::CloseRequested, start));
        assert!(host.is_animating());

        let later = start + Duration::from_secs(1);
        assert!(host.handle(Message::Tick(later), later));
        assert!(!host.is_presenting());
        assert!(!host.handle(Message::Tick(later), later));
    }

    #[test]
    fn dismiss_drops_the_sheet_immediately() {
        let mut host = ModalHost::default();
        present(&mut host);
        assert!(host.dismiss());
        assert!(!host.is_presenting());
        assert!(!host.dismiss());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut host = ModalHost::default();
        let mut config = SheetConfig::default();
        config.metrics.dismissible_height = 400.0;
        assert!(host
            .present(config, ColorScheme::light(), 16.0, VIEWPORT)
            .is_err());
        assert!(!host.is_presenting());
    }
}
