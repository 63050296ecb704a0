// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handpick core types shared by the front ends.
//!
//! A [Selection](selection::Selection) holds up to 2 hand cards and up to 5
//! community cards, cards are toggled in and out and go to the hand first:
//!
//! ```
//! # use handpick_core::{selection::{Selection, Toggle}, poker::*};
//! let mut selection = Selection::default();
//! for code in ["Ah", "Kh", "Qh", "Jh", "Th"] {
//!     selection.toggle(code.parse().unwrap());
//! }
//!
//! let result = selection.evaluate().unwrap();
//! assert_eq!(result.category(), Category::RoyalFlush);
//! assert_eq!(selection.cards_remaining(), 2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod advice;
pub mod message;
pub mod poker;
pub mod selection;
pub mod shared;
