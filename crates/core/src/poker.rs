// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker hand.
pub use handpick_eval::{Card, CardParseError, Category, Deck, HandResult, Rank, Suit, parse_cards};

/// The number of cards held by the player.
pub const HAND_CARDS: usize = 2;

/// The number of community cards shared by all players.
pub const COMMUNITY_CARDS: usize = 5;
