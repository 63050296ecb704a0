// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A selection shared between threads.
use parking_lot::Mutex;
use std::sync::Arc;

use crate::{
    message::Snapshot,
    poker::{Card, HandResult},
    selection::{Selection, Toggle},
};

/// A [Selection] that can be shared and changed from multiple threads.
///
/// Changes and the evaluation of the changed selection happen under the same
/// lock, so the returned result always matches the toggle that produced it.
#[derive(Debug, Clone, Default)]
pub struct SharedSelection {
    selection: Arc<Mutex<Selection>>,
}

impl SharedSelection {
    /// Creates a shared selection.
    pub fn new(selection: Selection) -> Self {
        Self {
            selection: Arc::new(Mutex::new(selection)),
        }
    }

    /// Toggles a card and evaluates the resulting selection.
    pub fn toggle(&self, card: Card) -> (Toggle, Option<HandResult>) {
        let mut selection = self.selection.lock();
        let outcome = selection.toggle(card);
        (outcome, selection.evaluate())
    }

    /// Removes the last selected card and evaluates the resulting selection.
    pub fn undo_last(&self) -> (Option<Card>, Option<HandResult>) {
        let mut selection = self.selection.lock();
        let card = selection.undo_last();
        (card, selection.evaluate())
    }

    /// Clears the selection.
    pub fn reset(&self) {
        self.selection.lock().reset();
    }

    /// Checks if a card is selected.
    pub fn is_selected(&self, card: Card) -> bool {
        self.selection.lock().is_selected(card)
    }

    /// The selection snapshot, `None` until the hand cards are complete.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.selection.lock().snapshot()
    }

    /// Calls `f` with the locked selection.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Selection) -> R,
    {
        f(&self.selection.lock())
    }
}
