// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting advice for a hand strength.
use std::fmt;

use crate::poker::COMMUNITY_CARDS;

/// The hand phase given the number of community cards still to come.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Three or more cards to come.
    Flop,
    /// Two cards to come.
    Turn,
    /// One or no cards to come.
    River,
}

impl Phase {
    /// The phase for the given number of cards still to come.
    pub fn from_cards_remaining(cards_remaining: u8) -> Phase {
        match cards_remaining {
            0..=1 => Phase::River,
            2 => Phase::Turn,
            _ => Phase::Flop,
        }
    }

    /// Strength thresholds in descending order with their advice.
    fn table(&self) -> &'static [(f64, &'static str); 5] {
        match self {
            Phase::Flop => &FLOP_ADVICE,
            Phase::Turn => &TURN_ADVICE,
            Phase::River => &RIVER_ADVICE,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            Phase::Flop => "Preflop/Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
        };

        write!(f, "{phase}")
    }
}

static FLOP_ADVICE: [(f64, &str); 5] = [
    (80.0, "Very strong hand, raise to build the pot."),
    (60.0, "Strong hand, bet for value."),
    (40.0, "Playable hand, call and see more cards."),
    (20.0, "Weak hand, check and call only small bets."),
    (0.0, "Very weak hand, check or fold."),
];

static TURN_ADVICE: [(f64, &str); 5] = [
    (85.0, "Very strong hand, raise."),
    (65.0, "Strong hand, keep betting for value."),
    (45.0, "Marginal hand, call if the price is right."),
    (25.0, "Weak hand, check and fold to large bets."),
    (0.0, "Very weak hand, fold."),
];

static RIVER_ADVICE: [(f64, &str); 5] = [
    (90.0, "Very strong hand, bet big or go all in."),
    (70.0, "Strong hand, bet for value."),
    (50.0, "Showdown value, check and call."),
    (30.0, "Weak hand, check and fold to a bet."),
    (0.0, "Very weak hand, fold."),
];

/// Returns the advice for a strength percentage and the number of community
/// cards still to come.
///
/// Strengths are clamped to 0..=100 with NaN counted as 0.
pub fn recommend(strength: f64, cards_remaining: u8) -> &'static str {
    let strength = if strength.is_nan() {
        0.0
    } else {
        strength.clamp(0.0, 100.0)
    };

    let cards_remaining = cards_remaining.min(COMMUNITY_CARDS as u8);
    let table = Phase::from_cards_remaining(cards_remaining).table();

    table
        .iter()
        .find(|(threshold, _)| strength >= *threshold)
        .map(|(_, advice)| *advice)
        .unwrap_or(table[table.len() - 1].1)
}
