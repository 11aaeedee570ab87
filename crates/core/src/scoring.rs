use crate::{evaluate_hand, scoring_cards, Card, GameConfig, HandKind, Rank, Score};
use std::collections::HashMap;

/// Base chip/mult values per hand category, per-level increments, and
/// per-rank chip values, built once from config.
#[derive(Debug, Clone)]
pub struct ScoreTables {
    hand_rules: HashMap<HandKind, (i64, f64)>,
    hand_level_rules: HashMap<HandKind, (i64, f64)>,
    rank_chips: HashMap<Rank, i64>,
}

impl ScoreTables {
    pub fn from_config(config: &GameConfig) -> Self {
        let mut hand_rules = HashMap::new();
        let mut hand_level_rules = HashMap::new();
        for rule in &config.hands {
            hand_rules.insert(rule.kind, (rule.base_chips, rule.base_mult));
            hand_level_rules.insert(rule.kind, (rule.level_chips, rule.level_mult));
        }
        let mut rank_chips = HashMap::new();
        for rule in &config.ranks {
            rank_chips.insert(rule.rank, rule.chips);
        }
        Self {
            hand_rules,
            hand_level_rules,
            rank_chips,
        }
    }

    pub fn hand_base(&self, kind: HandKind) -> (i64, f64) {
        self.hand_rules.get(&kind).copied().unwrap_or((0, 1.0))
    }

    /// Base values after applying the category's upgrade level. Level 1 is
    /// the unupgraded base.
    pub fn hand_base_for_level(&self, kind: HandKind, level: u32) -> (i64, f64) {
        let (base_chips, base_mult) = self.hand_base(kind);
        if level <= 1 {
            return (base_chips, base_mult);
        }
        let (level_chips, level_mult) = self
            .hand_level_rules
            .get(&kind)
            .copied()
            .unwrap_or((0, 0.0));
        let extra = (level - 1) as i64;
        let chips = base_chips.saturating_add(level_chips.saturating_mul(extra));
        let mult = base_mult + level_mult * extra as f64;
        (chips, mult)
    }

    pub fn rank_chips(&self, rank: Rank) -> i64 {
        *self.rank_chips.get(&rank).unwrap_or(&0)
    }
}

/// Evaluation result for a selection: the category, which cards score,
/// and the chip/mult totals before any joker effects.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub hand: HandKind,
    pub base: Score,
    pub rank_chips: i64,
    pub scoring_indices: Vec<usize>,
    pub total: Score,
}

/// Classify `cards` and compute the pre-joker score: category base at the
/// current upgrade level, plus each scoring card's rank chips.
pub fn score_base(
    cards: &[Card],
    tables: &ScoreTables,
    hand_levels: &HashMap<HandKind, u32>,
) -> ScoreBreakdown {
    let hand = evaluate_hand(cards);
    let level = hand_levels.get(&hand).copied().unwrap_or(1);
    let (base_chips, base_mult) = tables.hand_base_for_level(hand, level);
    let base = Score {
        chips: if cards.is_empty() { 0 } else { base_chips },
        mult: base_mult,
    };

    let scoring = scoring_cards(cards, hand);
    let rank_chips: i64 = scoring
        .iter()
        .map(|&idx| tables.rank_chips(cards[idx].rank))
        .sum();

    let total = Score {
        chips: base.chips + rank_chips,
        mult: base.mult,
    };

    ScoreBreakdown {
        hand,
        base,
        rank_chips,
        scoring_indices: scoring,
        total,
    }
}
