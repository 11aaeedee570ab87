use crate::{Card, Rank};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    FiveOfAKind,
    FlushHouse,
    FlushFive,
}

impl HandKind {
    pub const ALL: [HandKind; 12] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
        HandKind::FiveOfAKind,
        HandKind::FlushHouse,
        HandKind::FlushFive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Three of a Kind",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
            HandKind::FiveOfAKind => "Five of a Kind",
            HandKind::FlushHouse => "Flush House",
            HandKind::FlushFive => "Flush Five",
        }
    }
}

/// Classify a selection of up to five cards. Pure; re-invoked on every
/// selection change rather than incrementally maintained.
pub fn evaluate_hand(cards: &[Card]) -> HandKind {
    if cards.is_empty() {
        return HandKind::HighCard;
    }

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    let mut suits: Vec<crate::Suit> = Vec::with_capacity(4);
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
        if !suits.contains(&card.suit) {
            suits.push(card.suit);
        }
    }
    let mut counts: Vec<usize> = rank_counts.values().copied().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    // Flush and straight are only reachable with exactly five cards.
    let is_flush = cards.len() == 5 && suits.len() == 1;
    let is_straight = cards.len() == 5 && is_five_straight(cards);

    if counts[0] == 5 {
        return if is_flush {
            HandKind::FlushFive
        } else {
            HandKind::FiveOfAKind
        };
    }
    if is_flush && is_straight {
        return HandKind::StraightFlush;
    }
    if counts[0] == 4 {
        return HandKind::Quads;
    }
    if counts[0] == 3 && counts.get(1) == Some(&2) {
        return if is_flush {
            HandKind::FlushHouse
        } else {
            HandKind::FullHouse
        };
    }
    if is_flush {
        return HandKind::Flush;
    }
    if is_straight {
        return HandKind::Straight;
    }
    if counts[0] == 3 {
        return HandKind::Trips;
    }
    if counts[0] == 2 && counts.get(1) == Some(&2) {
        return HandKind::TwoPair;
    }
    if counts[0] == 2 {
        return HandKind::Pair;
    }
    HandKind::HighCard
}

/// Indices of the cards that contribute chips, in input (selection) order.
///
/// Five-card categories score all five cards; kind-based categories score
/// only the matching rank groups; high card scores the single highest card
/// with Ace counted high.
pub fn scoring_cards(cards: &[Card], kind: HandKind) -> Vec<usize> {
    if cards.is_empty() {
        return Vec::new();
    }

    match kind {
        HandKind::HighCard => highest_card_index(cards).into_iter().collect(),
        HandKind::Pair => indices_of_rank_groups(cards, 2, 1),
        HandKind::TwoPair => indices_of_rank_groups(cards, 2, 2),
        HandKind::Trips => indices_of_rank_groups(cards, 3, 1),
        HandKind::Quads => indices_of_rank_groups(cards, 4, 1),
        HandKind::Straight
        | HandKind::Flush
        | HandKind::FullHouse
        | HandKind::StraightFlush
        | HandKind::FiveOfAKind
        | HandKind::FlushHouse
        | HandKind::FlushFive => (0..cards.len()).collect(),
    }
}

/// Five pairwise-distinct ranks spanning 4, Ace high, or the A-2-3-4-5
/// wheel with Ace low. Duplicate ranks invalidate the straight.
fn is_five_straight(cards: &[Card]) -> bool {
    let mut values: Vec<u8> = cards.iter().map(|card| card.rank.value()).collect();
    values.sort_unstable();
    values.dedup();
    if values.len() != 5 {
        return false;
    }
    if values == [2, 3, 4, 5, 14] {
        return true;
    }
    values[4] - values[0] == 4
}

fn highest_card_index(cards: &[Card]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (idx, card) in cards.iter().enumerate() {
        let value = card.rank.value();
        if best.map(|(_, v)| value > v).unwrap_or(true) {
            best = Some((idx, value));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Indices of cards whose rank appears exactly `count` times, limited to
/// `max_groups` distinct ranks taken in ascending rank order.
fn indices_of_rank_groups(cards: &[Card], count: usize, max_groups: usize) -> Vec<usize> {
    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
    }
    let mut ranks: Vec<Rank> = rank_counts
        .iter()
        .filter(|(_, &c)| c == count)
        .map(|(rank, _)| *rank)
        .collect();
    ranks.sort_by_key(|rank| rank.value());
    ranks.truncate(max_groups);

    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| ranks.contains(&card.rank))
        .map(|(idx, _)| idx)
        .collect()
}
