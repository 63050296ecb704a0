// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Type definitions for messages exchanged with the strength prediction service.
//!
//! The selection is sent as a [Snapshot] with the cards codes:
//!
//! ```json
//! {"hand":["Ah","Kd"],"community":["2c","7s","Td"]}
//! ```
//!
//! and the service responds with a [Prediction].
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    advice,
    poker::{COMMUNITY_CARDS, Card, HAND_CARDS},
};

/// The selected cards sent to the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The hand cards.
    pub hand: Vec<Card>,
    /// The community cards.
    pub community: Vec<Card>,
}

impl Snapshot {
    /// Serializes this snapshot to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes and checks a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot = serde_json::from_str::<Snapshot>(json)?;

        if snapshot.hand.len() != HAND_CARDS {
            bail!("Snapshot must have {HAND_CARDS} hand cards");
        }

        if snapshot.community.len() > COMMUNITY_CARDS {
            bail!("Snapshot must have at most {COMMUNITY_CARDS} community cards");
        }

        let mut seen = 0u64;
        for card in snapshot.hand.iter().chain(&snapshot.community) {
            if seen & card.mask() != 0 {
                bail!("Duplicate card {card}");
            }

            seen |= card.mask();
        }

        Ok(snapshot)
    }
}

/// The hand strength returned by the prediction service.
///
/// Strengths are percentages clamped to 0..=100, a missing predicted strength
/// is 0 and a missing exact strength is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPrediction")]
pub struct Prediction {
    /// The predicted hand strength.
    pub predicted_hand_strength: f64,
    /// The exact hand strength if available.
    pub exact_hand_strength: Option<f64>,
    /// Number of community cards still to come, 0..=5.
    pub cards_remaining: u8,
}

impl Prediction {
    /// Deserializes a prediction from the service JSON response.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The advice for the predicted strength.
    pub fn advice(&self) -> &'static str {
        advice::recommend(self.predicted_hand_strength, self.cards_remaining)
    }
}

/// The prediction as sent by the service, every field can be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPrediction {
    #[serde(alias = "predictedHandStrength")]
    predicted_hand_strength: Option<Number>,
    #[serde(alias = "exactHandStrength")]
    exact_hand_strength: Option<Number>,
    #[serde(alias = "cardsRemaining")]
    cards_remaining: Option<Number>,
}

/// A number, a number in a string, or a text like "unavailable".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Number {
    Value(f64),
    Text(String),
}

impl Number {
    /// The numeric value, `None` for NaN and texts that are not numbers.
    fn value(&self) -> Option<f64> {
        let n = match self {
            Number::Value(n) => *n,
            Number::Text(s) => s.trim().parse::<f64>().ok()?,
        };

        (!n.is_nan()).then_some(n)
    }

    fn strength(&self) -> Option<f64> {
        self.value().map(|n| n.clamp(0.0, 100.0))
    }

    fn cards(&self) -> Option<u8> {
        self.value()
            .map(|n| n.trunc().clamp(0.0, COMMUNITY_CARDS as f64) as u8)
    }
}

impl From<RawPrediction> for Prediction {
    fn from(raw: RawPrediction) -> Self {
        Self {
            predicted_hand_strength: raw
                .predicted_hand_strength
                .and_then(|n| n.strength())
                .unwrap_or(0.0),
            exact_hand_strength: raw.exact_hand_strength.and_then(|n| n.strength()),
            cards_remaining: raw.cards_remaining.and_then(|n| n.cards()).unwrap_or(0),
        }
    }
}
