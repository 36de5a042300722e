// SPDX-License-Identifier: MPL-2.0
//! FIFO event driver around a [`Sheet`].
//!
//! Input adapters push events as they arrive; the owner drains the queue
//! once per update and hands the resulting commands to the layout layer.

use super::machine::{Command, Event, Sheet};
use std::collections::VecDeque;

/// Owns one sheet and the events waiting to be applied to it.
#[derive(Debug, Clone)]
pub struct SheetDriver {
    sheet: Sheet,
    queue: VecDeque<Event>,
}

impl SheetDriver {
    #[must_use]
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            queue: VecDeque::new(),
        }
    }

    /// Enqueues an event without applying it.
    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Applies every queued event in arrival order.
    pub fn drain(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();
        while let Some(event) = self.queue.pop_front() {
            let transition = self.sheet.step(event);
            self.sheet = transition.sheet;
            commands.extend(transition.commands);
        }
        commands
    }

    /// Pushes one event and drains the queue.
    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        self.push(event);
        self.drain()
    }

    #[must_use]
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }
}
