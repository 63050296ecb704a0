// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classifier.
//!
//! The classifier counts ranks and suits into fixed size arrays and then
//! checks the hand categories from the strongest to the weakest, the first
//! category that matches is the hand category.
//!
//! It provides a [HandResult::classify] method that computes the hand category
//! and tie break ranks without extracting the best hand, and a slower
//! [HandResult::classify_with_best_hand] that also returns the five cards that
//! make the hand, useful for UIs to show the hand.
mod category;
mod classify;

pub use category::Category;
pub use classify::HandResult;
