// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handpick command line hand evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::io::{self, Write};

use handpick_core::{
    message::Prediction,
    poker::{COMMUNITY_CARDS, Deck, HAND_CARDS, parse_cards},
    selection::Selection,
};

mod command;
mod terminal;

use terminal::EvalOptions;

#[derive(Debug, Parser)]
struct Cli {
    /// The log level.
    #[clap(long, short, default_value = "warn")]
    log_level: log::LevelFilter,
    #[clap(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Classify the best hand, hand cards first then community cards.
    Eval {
        /// Card codes like Ah Kd 2c.
        #[clap(required = true)]
        cards: Vec<String>,
        /// Print the five cards that make the hand.
        #[clap(long, short)]
        best: bool,
        /// Print the result as JSON.
        #[clap(long, short)]
        json: bool,
        /// Print the advice for this strength percentage.
        #[clap(long, short)]
        strength: Option<f64>,
    },
    /// Select cards interactively.
    Pick,
    /// Deal and evaluate a random selection.
    Random {
        /// Number of community cards.
        #[clap(
            long,
            short,
            default_value_t = 5,
            value_parser = clap::value_parser!(u8).range(0..=5)
        )]
        community: u8,
    },
    /// Print the advice for a prediction JSON message.
    Advise {
        /// The prediction, e.g. {"predicted_hand_strength": 72, "cards_remaining": 2}.
        prediction: String,
    },
}

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli.action) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(action: Action) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match action {
        Action::Eval {
            cards,
            best,
            json,
            strength,
        } => {
            let cards = parse_cards(&cards.join(" "))?;
            if cards.len() > HAND_CARDS + COMMUNITY_CARDS {
                bail!("Too many cards {}, at most 7 cards", cards.len());
            }

            if let Some(s) = strength {
                if !(0.0..=100.0).contains(&s) {
                    bail!("Strength {s} must be between 0 and 100");
                }
            }

            let opts = EvalOptions {
                best,
                json,
                strength,
            };

            terminal::print_eval(&mut stdout, &cards, opts)?;
        }
        Action::Pick => {
            info!("Starting interactive session");
            terminal::run_session(io::stdin().lock(), &mut stdout)?;
        }
        Action::Random { community } => {
            let mut deck = Deck::new_and_shuffled(&mut rand::rng());
            let mut selection = Selection::default();

            for _ in 0..HAND_CARDS + community as usize {
                if let Some(card) = deck.deal() {
                    selection.toggle(card);
                }
            }

            terminal::print_selection(&mut stdout, &selection)?;
        }
        Action::Advise { prediction } => {
            let prediction = Prediction::from_json(&prediction)?;
            info!("Prediction {prediction:?}");
            writeln!(stdout, "{}", prediction.advice())?;
        }
    }

    Ok(())
}
