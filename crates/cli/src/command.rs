// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Interactive session commands.
use anyhow::{Error, Result, bail};
use std::str::FromStr;

use handpick_core::poker::Card;

/// A command entered in an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Toggle the cards in order.
    Toggle(Vec<Card>),
    /// Remove the last selected card.
    Undo,
    /// Clear the selection.
    Reset,
    /// Show the selection.
    Show,
    /// Show the deck with the selected cards.
    Deck,
    /// Show the advice for a strength percentage.
    Strength(f64),
    /// Show the commands.
    Help,
    /// Exit the session.
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(Command::Show);
        };

        let cmd = match first.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            "undo" | "u" => Command::Undo,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "deck" => Command::Deck,
            "help" | "?" => Command::Help,
            "strength" => {
                let Some(value) = words.next() else {
                    bail!("Missing strength percentage");
                };

                let strength = value
                    .trim_end_matches('%')
                    .parse::<f64>()
                    .map_err(|_| anyhow::anyhow!("Invalid strength {value:?}"))?;

                if !(0.0..=100.0).contains(&strength) {
                    bail!("Strength {strength} must be between 0 and 100");
                }

                Command::Strength(strength)
            }
            _ => {
                // Each code is toggled in turn so the same card may appear twice.
                let cards = s
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|code| !code.is_empty())
                    .map(|code| code.parse::<Card>())
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(Command::Toggle(cards));
            }
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected argument {extra:?}");
        }

        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handpick_core::poker::parse_cards;

    #[test]
    fn parse_commands() {
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("  show ".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("QUIT".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("undo".parse::<Command>().unwrap(), Command::Undo);
        assert_eq!("reset".parse::<Command>().unwrap(), Command::Reset);
        assert_eq!("deck".parse::<Command>().unwrap(), Command::Deck);
        assert_eq!("?".parse::<Command>().unwrap(), Command::Help);
        assert_eq!(
            "strength 42.5".parse::<Command>().unwrap(),
            Command::Strength(42.5)
        );
        assert_eq!(
            "strength 80%".parse::<Command>().unwrap(),
            Command::Strength(80.0)
        );
    }

    #[test]
    fn parse_toggles() {
        assert_eq!(
            "Ah kd,2C".parse::<Command>().unwrap(),
            Command::Toggle(parse_cards("Ah Kd 2c").unwrap())
        );

        let Command::Toggle(cards) = "Ah Ah".parse::<Command>().unwrap() else {
            panic!("expected toggle");
        };
        assert_eq!(cards.len(), 2);
    }

    #[test]
    fn parse_errors() {
        assert!("Zz".parse::<Command>().is_err());
        assert!("Ah Kx".parse::<Command>().is_err());
        assert!("strength".parse::<Command>().is_err());
        assert!("strength abc".parse::<Command>().is_err());
        assert!("strength 101".parse::<Command>().is_err());
        assert!("reset now".parse::<Command>().is_err());
    }
}
