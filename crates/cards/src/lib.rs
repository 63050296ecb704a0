// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handpick cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use handpick_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "Td".parse().unwrap();
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!(td.rank(), Rank::Ten);
//! ```
//!
//! and a [Deck] type that holds the 52 cards in a fixed order, suits first
//! (hearts, diamonds, clubs, spades) then ranks from deuce to ace:
//!
//! ```
//! # use handpick_cards::{Card, Deck, Rank, Suit};
//! let deck = Deck::default();
//! assert_eq!(deck.count(), Deck::SIZE);
//! assert_eq!(deck.cards()[0], Card::new(Rank::Deuce, Suit::Hearts));
//! ```
//!
//! The deck can also iterate all k-cards hands, for example to count all 5
//! cards hands:
//!
//! ```no_run
//! # use handpick_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! Card codes are parsed with [parse_cards] or [str::parse], malformed codes
//! return a [CardParseError].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod code;
mod deck;

pub use code::{CardParseError, parse_cards};
pub use deck::{Card, Deck, Rank, Suit};
