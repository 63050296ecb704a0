// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards text encoding.
//!
//! A card code is the rank character (`2`-`9`, `T`, `J`, `Q`, `K`, `A`)
//! followed by the lowercase suit character (`h`, `d`, `c`, `s`), for example
//! `Ah` or `Tc`. Decoding is lenient on letters case and accepts `10` for the
//! ten, encoding always produces the canonical form.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when decoding a malformed card code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// The code is empty.
    #[error("empty card code")]
    Empty,
    /// The code is too long to be a card.
    #[error("invalid card code {0:?}")]
    Length(String),
    /// Unknown rank.
    #[error("invalid rank {0:?}, use 2-9, T, J, Q, K or A")]
    Rank(String),
    /// Unknown suit.
    #[error("invalid suit {0:?}, use h, d, c or s")]
    Suit(char),
    /// The same card appears twice in a list.
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

impl FromStr for Rank {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Rank::from_char(c).ok_or_else(|| CardParseError::Rank(s.to_string()))
            }
            _ if s == "10" => Ok(Rank::Ten),
            _ => Err(CardParseError::Rank(s.to_string())),
        }
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CardParseError::Empty);
        }

        // Longest code is "10h".
        if s.chars().count() > 3 {
            return Err(CardParseError::Length(s.to_string()));
        }

        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(CardParseError::Empty)?;
        let rank = chars.as_str().parse::<Rank>()?;
        let suit = Suit::from_char(suit_char).ok_or(CardParseError::Suit(suit_char))?;

        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parses a list of card codes separated by spaces or commas.
///
/// The same card cannot appear twice.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, CardParseError> {
    let mut seen = 0u64;
    let mut cards = Vec::new();

    for code in s.split(|c: char| c.is_whitespace() || c == ',') {
        if code.is_empty() {
            continue;
        }

        let card = code.parse::<Card>()?;
        if seen & card.mask() != 0 {
            return Err(CardParseError::Duplicate(card));
        }

        seen |= card.mask();
        cards.push(card);
    }

    Ok(cards)
}
