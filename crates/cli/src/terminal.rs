// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use log::{error, info};
use std::{
    io::{BufRead, Write},
    sync::mpsc,
};

use handpick_core::{
    advice::{self, Phase},
    poker::{COMMUNITY_CARDS, Card, Deck, HAND_CARDS, HandResult, Suit},
    selection::{Selection, SelectionChanged, Toggle},
};

use crate::command::Command;

/// Options for printing an evaluation.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvalOptions {
    /// Print the five cards that make the hand.
    pub best: bool,
    /// Print the result as JSON.
    pub json: bool,
    /// Print the advice for this strength percentage.
    pub strength: Option<f64>,
}

/// Prints the evaluation of hand cards followed by community cards.
pub fn print_eval(w: &mut impl Write, cards: &[Card], opts: EvalOptions) -> Result<()> {
    let Some((result, best)) = HandResult::classify_with_best_hand(cards) else {
        writeln!(w, "No cards")?;
        return Ok(());
    };

    info!("Evaluated {} cards: {result}", cards.len());

    if opts.json {
        writeln!(w, "{}", serde_json::to_string(&result)?)?;
    } else {
        print_result(w, &result)?;
    }

    if opts.best {
        writeln!(w, "Best hand: {}", cards_text(&best))?;
    }

    if let Some(strength) = opts.strength {
        let community = cards.len().saturating_sub(HAND_CARDS);
        let cards_remaining = COMMUNITY_CARDS.saturating_sub(community) as u8;
        print_advice(w, strength, cards_remaining)?;
    }

    w.flush()?;
    Ok(())
}

/// Runs an interactive session reading commands from `input`.
pub fn run_session(input: impl BufRead, w: &mut impl Write) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut selection = Selection::with_notifier(tx);
    let deck = Deck::default();

    print_help(w)?;
    prompt(w)?;

    for line in input.lines() {
        let line = line?;
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(cmd) => handle_command(w, &mut selection, &deck, cmd)?,
            Err(e) => {
                error!("Invalid command {line:?}: {e}");
                writeln!(w, "{e}")?;
            }
        }

        for event in rx.try_iter() {
            print_change(w, &event)?;
        }

        prompt(w)?;
    }

    Ok(())
}

fn handle_command(
    w: &mut impl Write,
    selection: &mut Selection,
    deck: &Deck,
    cmd: Command,
) -> Result<()> {
    match cmd {
        Command::Toggle(cards) => {
            for card in cards {
                if selection.toggle(card) == Toggle::Rejected {
                    writeln!(w, "Selection is full, {card} not added")?;
                }
            }

            print_selection(w, selection)?;
        }
        Command::Undo => {
            if selection.undo_last().is_none() {
                writeln!(w, "No cards selected")?;
            }

            print_selection(w, selection)?;
        }
        Command::Reset => {
            selection.reset();
            print_selection(w, selection)?;
        }
        Command::Show => print_selection(w, selection)?,
        Command::Deck => print_deck(w, deck, selection)?,
        Command::Strength(strength) => {
            print_advice(w, strength, selection.cards_remaining())?;
        }
        Command::Help => print_help(w)?,
        Command::Quit => {}
    }

    Ok(())
}

/// Prints the selected cards and their evaluation.
pub fn print_selection(w: &mut impl Write, selection: &Selection) -> Result<()> {
    writeln!(w, "Hand:      {}", cards_text(selection.hand()))?;
    writeln!(w, "Community: {}", cards_text(selection.community()))?;

    match selection.evaluate() {
        Some(result) => print_result(w, &result)?,
        None => writeln!(w, "Select two hand cards to evaluate")?,
    }

    w.flush()?;
    Ok(())
}

fn print_result(w: &mut impl Write, result: &HandResult) -> Result<()> {
    let text = format!("{:<16}{}", result.category(), ranks_text(result));
    queue!(
        w,
        style::Print("Result:    "),
        style::PrintStyledContent(text.as_str().dark_green()),
        style::Print("\n")
    )?;

    Ok(())
}

fn print_change(w: &mut impl Write, event: &SelectionChanged) -> Result<()> {
    // This is the payload a strength prediction service would receive.
    let json = event.snapshot.to_json()?;
    info!("Selection changed {json} {}", event.result);
    writeln!(w, "Snapshot:  {json}")?;
    Ok(())
}

fn print_advice(w: &mut impl Write, strength: f64, cards_remaining: u8) -> Result<()> {
    let phase = Phase::from_cards_remaining(cards_remaining);
    let advice = advice::recommend(strength, cards_remaining);
    writeln!(w, "Advice ({phase}, {strength:.0}%): {advice}")?;
    Ok(())
}

/// Prints the deck one row per suit, selected cards in brackets.
fn print_deck(w: &mut impl Write, deck: &Deck, selection: &Selection) -> Result<()> {
    for suit in Suit::suits() {
        for card in deck.iter().filter(|c| c.suit() == suit) {
            if selection.is_selected(*card) {
                queue!(
                    w,
                    style::PrintStyledContent(format!("[{card}]").as_str().yellow())
                )?;
            } else {
                write!(w, " {card} ")?;
            }
        }

        writeln!(w)?;
    }

    w.flush()?;
    Ok(())
}

fn print_help(w: &mut impl Write) -> Result<()> {
    writeln!(
        w,
        "Enter card codes (Ah, Td, 2c) to select or deselect cards, \
         the first two cards are the hand cards.\n\
         Commands: undo, reset, show, deck, strength <pct>, help, quit"
    )?;
    Ok(())
}

fn prompt(w: &mut impl Write) -> Result<()> {
    write!(w, "> ")?;
    w.flush()?;
    Ok(())
}

fn cards_text(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn ranks_text(result: &HandResult) -> String {
    result
        .tiebreak()
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
