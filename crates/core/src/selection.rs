// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand and community cards selection.
use log::debug;
use std::sync::mpsc;

use crate::{
    message::Snapshot,
    poker::{COMMUNITY_CARDS, Card, HAND_CARDS, HandResult},
};

/// The outcome of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The card has been added to the hand cards.
    AddedToHand,
    /// The card has been added to the community cards.
    AddedToCommunity,
    /// The card was selected and has been removed.
    Removed,
    /// The selection is full and the card has not been added.
    Rejected,
}

impl Toggle {
    /// Checks if the toggle changed the selection.
    pub fn is_change(&self) -> bool {
        !matches!(self, Toggle::Rejected)
    }
}

/// Event sent after a change that leaves the hand cards complete.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChanged {
    /// The selected cards.
    pub snapshot: Snapshot,
    /// The best hand for the selected cards.
    pub result: HandResult,
}

/// The hand and community cards selection.
///
/// Cards go to the hand until it has two cards and then to the community
/// until it has five cards, further cards are rejected. Toggling a selected
/// card removes it.
#[derive(Debug, Default)]
pub struct Selection {
    hand: Vec<Card>,
    community: Vec<Card>,
    /// Bit set of selected cards ids.
    selected: u64,
    /// Selected cards in placement order.
    placed: Vec<Card>,
    notify_tx: Option<mpsc::Sender<SelectionChanged>>,
}

impl Selection {
    /// Creates a selection that sends a [SelectionChanged] to `tx` after each
    /// change that leaves the hand cards complete.
    pub fn with_notifier(tx: mpsc::Sender<SelectionChanged>) -> Self {
        Self {
            notify_tx: Some(tx),
            ..Default::default()
        }
    }

    /// Toggles a card in or out of the selection.
    pub fn toggle(&mut self, card: Card) -> Toggle {
        let outcome = if self.is_selected(card) {
            self.hand.retain(|c| c != &card);
            self.community.retain(|c| c != &card);
            self.placed.retain(|c| c != &card);
            self.selected &= !card.mask();
            Toggle::Removed
        } else if self.hand.len() < HAND_CARDS {
            self.hand.push(card);
            self.placed.push(card);
            self.selected |= card.mask();
            Toggle::AddedToHand
        } else if self.community.len() < COMMUNITY_CARDS {
            self.community.push(card);
            self.placed.push(card);
            self.selected |= card.mask();
            Toggle::AddedToCommunity
        } else {
            debug!("Selection is full, card {card} rejected");
            return Toggle::Rejected;
        };

        debug!(
            "Card {card} {outcome:?} hand: {:?} community: {:?}",
            self.hand, self.community
        );

        self.notify();
        outcome
    }

    /// Removes the most recently placed card.
    pub fn undo_last(&mut self) -> Option<Card> {
        let card = self.placed.pop()?;
        self.hand.retain(|c| c != &card);
        self.community.retain(|c| c != &card);
        self.selected &= !card.mask();
        debug!("Card {card} removed");

        self.notify();
        Some(card)
    }

    /// Clears the selection.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.community.clear();
        self.placed.clear();
        self.selected = 0;
        debug!("Selection cleared");
    }

    /// Checks if a card is selected.
    pub fn is_selected(&self, card: Card) -> bool {
        self.selected & card.mask() != 0
    }

    /// The hand cards.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The community cards.
    pub fn community(&self) -> &[Card] {
        &self.community
    }

    /// The hand cards followed by the community cards.
    pub fn cards(&self) -> Vec<Card> {
        self.hand.iter().chain(&self.community).copied().collect()
    }

    /// Number of community cards still to select.
    pub fn cards_remaining(&self) -> u8 {
        (COMMUNITY_CARDS - self.community.len()) as u8
    }

    /// Checks if the hand cards are complete.
    pub fn has_hand(&self) -> bool {
        self.hand.len() == HAND_CARDS
    }

    /// Checks if both hand and community cards are complete.
    pub fn is_complete(&self) -> bool {
        self.has_hand() && self.community.len() == COMMUNITY_CARDS
    }

    /// Evaluates the selected cards, `None` until the hand cards are complete.
    pub fn evaluate(&self) -> Option<HandResult> {
        if self.has_hand() {
            HandResult::classify(&self.cards())
        } else {
            None
        }
    }

    /// The selection snapshot, `None` until the hand cards are complete.
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.has_hand().then(|| Snapshot {
            hand: self.hand.clone(),
            community: self.community.clone(),
        })
    }

    fn notify(&self) {
        let Some(tx) = self.notify_tx.as_ref() else {
            return;
        };

        if let (Some(snapshot), Some(result)) = (self.snapshot(), self.evaluate()) {
            // The receiver may have gone away, the selection keeps working.
            let _ = tx.send(SelectionChanged { snapshot, result });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker::{Category, Deck, parse_cards};
    use ahash::HashSet;
    use rand::prelude::*;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn select(selection: &mut Selection, codes: &str) {
        for card in parse_cards(codes).unwrap() {
            selection.toggle(card);
        }
    }

    #[test]
    fn hand_first() {
        let mut selection = Selection::default();
        assert_eq!(selection.toggle(card("Ah")), Toggle::AddedToHand);
        assert_eq!(selection.toggle(card("Kd")), Toggle::AddedToHand);
        assert_eq!(selection.toggle(card("2c")), Toggle::AddedToCommunity);

        assert_eq!(selection.hand(), parse_cards("Ah Kd").unwrap());
        assert_eq!(selection.community(), parse_cards("2c").unwrap());
        assert_eq!(selection.cards(), parse_cards("Ah Kd 2c").unwrap());
        assert_eq!(selection.cards_remaining(), 4);

        // Removing a hand card makes room in the hand for the next card.
        assert_eq!(selection.toggle(card("Ah")), Toggle::Removed);
        assert_eq!(selection.toggle(card("3c")), Toggle::AddedToHand);
        assert_eq!(selection.hand(), parse_cards("Kd 3c").unwrap());
        assert_eq!(selection.community(), parse_cards("2c").unwrap());
    }

    #[test]
    fn capacity() {
        let mut selection = Selection::default();
        select(&mut selection, "Ah Kd 2c 3c 4c 5c 6c");
        assert!(selection.is_complete());
        assert_eq!(selection.cards_remaining(), 0);

        assert_eq!(selection.toggle(card("7c")), Toggle::Rejected);
        assert!(!selection.is_selected(card("7c")));
        assert_eq!(selection.hand().len(), 2);
        assert_eq!(selection.community().len(), 5);

        // Community cards removal makes room for a community card.
        assert_eq!(selection.toggle(card("4c")), Toggle::Removed);
        assert_eq!(selection.toggle(card("7c")), Toggle::AddedToCommunity);
    }

    #[test]
    fn toggle_twice() {
        let mut selection = Selection::default();
        select(&mut selection, "Ah Kd 2c");

        for card in Deck::default() {
            let hand = selection.hand().to_vec();
            let community = selection.community().to_vec();

            let first = selection.toggle(card);
            if first.is_change() {
                selection.toggle(card);
            }

            if first == Toggle::Removed {
                // Removing and adding back a card may change the order but
                // not which cards are in the hand and community.
                let as_set = |cards: &[Card]| cards.iter().copied().collect::<HashSet<_>>();
                assert!(selection.is_selected(card), "{card}");
                assert_eq!(as_set(selection.hand()), as_set(&hand), "{card}");
                assert_eq!(as_set(selection.community()), as_set(&community), "{card}");
            } else {
                assert_eq!(selection.hand(), hand, "{card}");
                assert_eq!(selection.community(), community, "{card}");
            }
        }

        // Adding then removing a card restores the previous state.
        let before = selection.cards();
        assert_eq!(selection.toggle(card("9s")), Toggle::AddedToCommunity);
        assert!(selection.is_selected(card("9s")));
        assert_eq!(selection.toggle(card("9s")), Toggle::Removed);
        assert!(!selection.is_selected(card("9s")));
        assert_eq!(selection.cards(), before);
    }

    #[test]
    fn random_toggles_capacity() {
        let deck = Deck::default();
        let mut rng = rand::rng();
        let mut selection = Selection::default();

        for _ in 0..10_000 {
            let card = *deck.cards().choose(&mut rng).unwrap();
            let was_selected = selection.is_selected(card);
            let outcome = selection.toggle(card);

            assert!(selection.hand().len() <= HAND_CARDS);
            assert!(selection.community().len() <= COMMUNITY_CARDS);
            assert_eq!(was_selected, outcome == Toggle::Removed);
            assert_eq!(
                selection.is_selected(card),
                outcome.is_change() && outcome != Toggle::Removed
            );

            // The hand fills before the community.
            if outcome == Toggle::AddedToCommunity {
                assert_eq!(selection.hand().len(), HAND_CARDS);
            }

            // Hand and community are disjoint.
            let cards = selection.cards();
            let mask = cards.iter().fold(0u64, |m, c| m | c.mask());
            assert_eq!(mask.count_ones() as usize, cards.len());

            if rng.random_ratio(1, 200) {
                selection.reset();
            }
        }
    }

    #[test]
    fn undo_and_reset() {
        let mut selection = Selection::default();
        assert_eq!(selection.undo_last(), None);

        select(&mut selection, "Ah Kd 2c 3c");
        assert_eq!(selection.undo_last(), Some(card("3c")));
        assert_eq!(selection.undo_last(), Some(card("2c")));
        assert_eq!(selection.undo_last(), Some(card("Kd")));
        assert!(!selection.is_selected(card("Kd")));
        assert_eq!(selection.hand(), parse_cards("Ah").unwrap());

        select(&mut selection, "Kd 2c");
        selection.reset();
        assert_eq!(selection.undo_last(), None);
        assert!(selection.cards().is_empty());
        assert!(!selection.is_selected(card("Ah")));
        assert_eq!(selection.cards_remaining(), 5);
        assert!(selection.evaluate().is_none());
        assert!(selection.snapshot().is_none());
    }

    #[test]
    fn undo_after_hand_refill() {
        let mut selection = Selection::default();
        select(&mut selection, "Ah Kd 2c");

        // The freed hand slot takes the next card, undo removes that card.
        assert_eq!(selection.toggle(card("Ah")), Toggle::Removed);
        assert_eq!(selection.toggle(card("3c")), Toggle::AddedToHand);
        assert_eq!(selection.undo_last(), Some(card("3c")));
        assert!(!selection.is_selected(card("3c")));
        assert_eq!(selection.hand(), parse_cards("Kd").unwrap());
        assert_eq!(selection.community(), parse_cards("2c").unwrap());

        assert_eq!(selection.undo_last(), Some(card("2c")));
        assert_eq!(selection.undo_last(), Some(card("Kd")));
        assert_eq!(selection.undo_last(), None);
    }

    #[test]
    fn evaluation() {
        let mut selection = Selection::default();
        select(&mut selection, "Ah");
        assert!(selection.evaluate().is_none());

        select(&mut selection, "Ad");
        assert_eq!(selection.evaluate().unwrap().category(), Category::Pair);

        select(&mut selection, "As Kc Kh");
        let result = selection.evaluate().unwrap();
        assert_eq!(result.category(), Category::FullHouse);
        assert_eq!(result.to_string(), "Full House A K");

        let snapshot = selection.snapshot().unwrap();
        assert_eq!(snapshot.hand, parse_cards("Ah Ad").unwrap());
        assert_eq!(snapshot.community, parse_cards("As Kc Kh").unwrap());
    }

    #[test]
    fn notifications() {
        let (tx, rx) = mpsc::channel();
        let mut selection = Selection::with_notifier(tx);

        // No event until the hand is complete.
        selection.toggle(card("Ah"));
        assert!(rx.try_recv().is_err());

        selection.toggle(card("Ad"));
        let event = rx.try_recv().unwrap();
        assert_eq!(event.result.category(), Category::Pair);
        assert_eq!(event.snapshot.hand, parse_cards("Ah Ad").unwrap());
        assert!(event.snapshot.community.is_empty());

        selection.toggle(card("As"));
        let event = rx.try_recv().unwrap();
        assert_eq!(event.result.category(), Category::ThreeOfAKind);

        // Rejected toggles do not notify.
        select(&mut selection, "2c 3c 4c 5c");
        assert_eq!(rx.try_iter().count(), 4);
        assert_eq!(selection.toggle(card("9d")), Toggle::Rejected);
        assert!(rx.try_recv().is_err());

        // Removing a community card notifies, removing a hand card does not.
        selection.toggle(card("5c"));
        assert!(rx.try_recv().is_ok());
        selection.toggle(card("Ah"));
        assert!(rx.try_recv().is_err());

        // Undo that completes the hand notifies.
        selection.toggle(card("Ah"));
        assert_eq!(rx.try_iter().count(), 1);
        selection.undo_last();
        assert!(rx.try_recv().is_ok());

        selection.reset();
        assert!(rx.try_recv().is_err());

        // A dropped receiver does not break the selection.
        drop(rx);
        select(&mut selection, "Kh Kd");
        assert_eq!(selection.evaluate().unwrap().category(), Category::Pair);
    }
}
