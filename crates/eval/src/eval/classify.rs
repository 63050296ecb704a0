// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand classification.
use serde::{Serialize, Serializer};
use std::fmt;

use super::Category;
use handpick_cards::{Card, Rank, Suit};

/// A set of ranks, bit n is set for a rank with value n.
type RankBits = u16;

/// The wheel ranks: ace, deuce, trey, four, five.
const WHEEL: RankBits = (1 << 14) | (1 << 5) | (1 << 4) | (1 << 3) | (1 << 2);

/// The number of cards in a poker hand.
const HAND_SIZE: usize = 5;

/// The best hand that can be made from a set of cards.
///
/// Results are ordered by category and then by tie break ranks, so that
/// comparing two results compares the hands strength.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HandResult {
    category: Category,
    #[serde(serialize_with = "rank_values")]
    tiebreak: Vec<Rank>,
}

impl HandResult {
    /// Classifies the best hand that can be made from up to 7 distinct cards.
    ///
    /// Returns `None` if there are no cards. With fewer than five cards only
    /// the categories that do not need five cards are reported.
    pub fn classify(cards: &[Card]) -> Option<HandResult> {
        if cards.is_empty() {
            return None;
        }

        let counts = Counts::new(cards);

        // From the strongest to the weakest, the first match wins.
        let result = counts
            .straight_flush()
            .or_else(|| counts.four_of_a_kind())
            .or_else(|| counts.full_house())
            .or_else(|| counts.flush())
            .or_else(|| counts.straight())
            .or_else(|| counts.three_of_a_kind())
            .or_else(|| counts.two_pair())
            .or_else(|| counts.pair())
            .unwrap_or_else(|| counts.high_card());

        Some(result)
    }

    /// Classifies the best hand and returns the cards that make it.
    ///
    /// The hand cards are the five cards that make the hand, or all the cards
    /// if there are fewer than five cards, sorted by descending rank.
    pub fn classify_with_best_hand(cards: &[Card]) -> Option<(HandResult, Vec<Card>)> {
        let best = Self::classify(cards)?;

        let mut hand = if cards.len() <= HAND_SIZE {
            cards.to_vec()
        } else {
            // Find the first 5 cards subset that makes the best hand.
            let n = cards.len();
            (0u32..1 << n)
                .filter(|mask| mask.count_ones() as usize == HAND_SIZE)
                .map(|mask| {
                    (0..n)
                        .filter(|i| mask & (1 << i) != 0)
                        .map(|i| cards[i])
                        .collect::<Vec<_>>()
                })
                .find(|five| Self::classify(five).as_ref() == Some(&best))
                .unwrap_or_else(|| cards[..HAND_SIZE].to_vec())
        };

        hand.sort_by(|a, b| b.rank().cmp(&a.rank()));
        Some((best, hand))
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The ranks used to compare hands of the same category.
    ///
    /// For hands made of pairs, trips, or quads these are the ranks of the
    /// groups, larger groups first, followed by the kickers. For straights
    /// this is the top card of the sequence, a five for the wheel. For
    /// flushes and high card hands these are the highest ranks.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for rank in &self.tiebreak {
            write!(f, " {rank}")?;
        }

        Ok(())
    }
}

fn rank_values<S: Serializer>(ranks: &[Rank], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(ranks.iter().map(Rank::value))
}

/// Rank and suit counts of a set of cards.
struct Counts {
    /// Number of cards for each rank indexed by rank value.
    ranks: [u8; 15],
    /// Ranks held in each suit.
    suit_ranks: [RankBits; 4],
    /// Number of cards for each suit.
    suits: [u8; 4],
    /// The distinct ranks.
    rank_bits: RankBits,
    /// (count, rank) groups sorted by count and then rank, both descending.
    groups: Vec<(u8, Rank)>,
    /// Number of cards.
    len: usize,
}

impl Counts {
    fn new(cards: &[Card]) -> Self {
        let mut ranks = [0u8; 15];
        let mut suit_ranks = [0; 4];
        let mut suits = [0u8; 4];
        let mut rank_bits = 0;

        for card in cards {
            let value = card.rank().value();
            let suit = card.suit().index();
            ranks[value as usize] += 1;
            suit_ranks[suit] |= 1 << value;
            suits[suit] += 1;
            rank_bits |= 1 << value;
        }

        // Ranks are visited from the highest so that a stable sort by count
        // keeps ranks descending within the same count.
        let mut groups = Rank::ranks()
            .rev()
            .filter(|r| ranks[r.value() as usize] > 0)
            .map(|r| (ranks[r.value() as usize], r))
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| b.0.cmp(&a.0));

        Self {
            ranks,
            suit_ranks,
            suits,
            rank_bits,
            groups,
            len: cards.len(),
        }
    }

    /// The count of the nth largest group.
    fn count(&self, nth: usize) -> u8 {
        self.groups.get(nth).map(|g| g.0).unwrap_or(0)
    }

    /// The rank of the nth largest group.
    fn group_rank(&self, nth: usize) -> Rank {
        self.groups[nth].1
    }

    fn has_five_cards(&self) -> bool {
        self.len >= HAND_SIZE
    }

    fn flush_suit(&self) -> Option<Suit> {
        Suit::suits().find(|s| self.suits[s.index()] as usize >= HAND_SIZE)
    }

    fn straight_flush(&self) -> Option<HandResult> {
        let suit = self.flush_suit()?;
        let top = straight_top(self.suit_ranks[suit.index()])?;
        let category = if top == Rank::Ace {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };

        Some(HandResult {
            category,
            tiebreak: vec![top],
        })
    }

    fn four_of_a_kind(&self) -> Option<HandResult> {
        (self.count(0) == 4 && self.has_five_cards())
            .then(|| self.with_kickers(Category::FourOfAKind, &[(self.group_rank(0), 4)]))
    }

    fn full_house(&self) -> Option<HandResult> {
        // With 7 cards the pair may come from a second three of a kind.
        (self.count(0) == 3 && self.count(1) >= 2).then(|| {
            let groups = [(self.group_rank(0), 3), (self.group_rank(1), 2)];
            self.with_kickers(Category::FullHouse, &groups)
        })
    }

    fn flush(&self) -> Option<HandResult> {
        let suit = self.flush_suit()?;
        let bits = self.suit_ranks[suit.index()];
        let tiebreak = Rank::ranks()
            .rev()
            .filter(|r| bits & (1 << r.value()) != 0)
            .take(HAND_SIZE)
            .collect();

        Some(HandResult {
            category: Category::Flush,
            tiebreak,
        })
    }

    fn straight(&self) -> Option<HandResult> {
        straight_top(self.rank_bits).map(|top| HandResult {
            category: Category::Straight,
            tiebreak: vec![top],
        })
    }

    fn three_of_a_kind(&self) -> Option<HandResult> {
        // Four cards of the same rank without a fifth card are reported as
        // three of a kind with the fourth card as kicker.
        (self.count(0) >= 3)
            .then(|| self.with_kickers(Category::ThreeOfAKind, &[(self.group_rank(0), 3)]))
    }

    fn two_pair(&self) -> Option<HandResult> {
        (self.count(0) == 2 && self.count(1) == 2).then(|| {
            let groups = [(self.group_rank(0), 2), (self.group_rank(1), 2)];
            self.with_kickers(Category::TwoPair, &groups)
        })
    }

    fn pair(&self) -> Option<HandResult> {
        (self.count(0) == 2).then(|| self.with_kickers(Category::Pair, &[(self.group_rank(0), 2)]))
    }

    fn high_card(&self) -> HandResult {
        self.with_kickers(Category::HighCard, &[])
    }

    /// Builds a result from the given (rank, cards) groups followed by the
    /// highest remaining cards up to five cards.
    fn with_kickers(&self, category: Category, groups: &[(Rank, u8)]) -> HandResult {
        let mut left = self.ranks;
        let mut tiebreak = Vec::with_capacity(HAND_SIZE);
        let mut used = 0;

        for &(rank, count) in groups {
            left[rank.value() as usize] -= count;
            tiebreak.push(rank);
            used += count as usize;
        }

        let kickers = Rank::ranks()
            .rev()
            .flat_map(|r| std::iter::repeat_n(r, left[r.value() as usize] as usize))
            .take(HAND_SIZE.saturating_sub(used));
        tiebreak.extend(kickers);

        HandResult { category, tiebreak }
    }
}

/// Returns the top rank of the highest five ranks sequence in `bits`.
fn straight_top(bits: RankBits) -> Option<Rank> {
    const RUN: RankBits = 0b11111;

    let top = (6..=14u8).rev().find(|top| {
        let run = RUN << (top - 4);
        bits & run == run
    });

    match top {
        Some(top) => Rank::from_value(top),
        // The ace plays low in the wheel.
        None if bits & WHEEL == WHEEL => Some(Rank::Five),
        None => None,
    }
}
