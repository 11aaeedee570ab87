use crate::{Card, HandKind, Rank, ScoreEffect, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JokerRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsumableKind {
    Tarot,
    Planet,
    Spectral,
}

impl ConsumableKind {
    pub fn name(self) -> &'static str {
        match self {
            ConsumableKind::Tarot => "Tarot",
            ConsumableKind::Planet => "Planet",
            ConsumableKind::Spectral => "Spectral",
        }
    }
}

/// When a joker fires during scoring. Each joker has exactly one timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivationType {
    /// Once per played hand, regardless of cards.
    Independent,
    /// Once per scoring card matching the joker's filter.
    OnScored,
    /// Once per held, unplayed card matching the filter.
    OnHeld,
}

/// Predicate for per-card joker hooks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardFilter {
    Any,
    OfSuit(Suit),
    OfRank(Rank),
    Face,
}

impl CardFilter {
    pub fn matches(&self, card: Card) -> bool {
        match self {
            CardFilter::Any => true,
            CardFilter::OfSuit(suit) => card.suit == *suit,
            CardFilter::OfRank(rank) => card.rank == *rank,
            CardFilter::Face => card.is_face(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum JokerHook {
    Independent(ScoreEffect),
    OnScored {
        filter: CardFilter,
        effect: ScoreEffect,
    },
    OnHeld {
        filter: CardFilter,
        effect: ScoreEffect,
    },
}

impl JokerHook {
    pub fn activation(&self) -> ActivationType {
        match self {
            JokerHook::Independent(_) => ActivationType::Independent,
            JokerHook::OnScored { .. } => ActivationType::OnScored,
            JokerHook::OnHeld { .. } => ActivationType::OnHeld,
        }
    }
}

/// One-shot consumable payload. Target-taking variants read the current
/// hand selection; the def's `targets` count gates how many.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ConsumableEffect {
    DoubleMoney { cap: i64 },
    AddMoney(i64),
    UpgradeHand { hand: HandKind, amount: u32 },
    UpgradeAllHands { amount: u32 },
    IncreaseSelectedRank,
    ConvertSelectedSuit(Suit),
    CopySelected,
    DestroySelected,
}
