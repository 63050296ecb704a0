// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handpick best hand classifier.
//!
//! Finds the best five cards poker hand that can be made from 1 to 7 cards and
//! returns its [Category] with the tie break ranks needed to compare two hands
//! of the same category:
//!
//! ```
//! # use handpick_eval::*;
//! let cards = parse_cards("2h 2d 5s 5c 9c").unwrap();
//! let pairs = HandResult::classify(&cards).unwrap();
//! assert_eq!(pairs.category(), Category::TwoPair);
//! assert_eq!(pairs.tiebreak(), [Rank::Five, Rank::Deuce, Rank::Nine]);
//!
//! let cards = parse_cards("2h 2d 2c 5s 9c").unwrap();
//! let trips = HandResult::classify(&cards).unwrap();
//! assert!(trips > pairs);
//! ```
//!
//! An empty cards slice has no hand:
//!
//! ```
//! # use handpick_eval::*;
//! assert!(HandResult::classify(&[]).is_none());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Category, HandResult};

// Reexport cards types.
pub use handpick_cards::{Card, CardParseError, Deck, Rank, Suit, parse_cards};
