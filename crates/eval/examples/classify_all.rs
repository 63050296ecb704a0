// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Classifies every k-cards hand in the deck and prints the categories counts.
//
// Run with:
//
// ```bash
// $ cargo r --release -p handpick-eval --example classify_all -- 7
// ```
use std::time::Instant;

use handpick_eval::*;

fn main() {
    let k = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(5)
        .clamp(2, 7);

    let now = Instant::now();
    let mut counts = [0usize; Category::ALL.len()];

    Deck::default().for_each(k, |hand| {
        if let Some(result) = HandResult::classify(hand) {
            counts[result.category() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::ALL {
        println!("{:<17}{}", format!("{category}:"), counts[category as usize]);
    }
}
