use crate::{BlindKind, HandKind, JokerRarity, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRule {
    pub kind: HandKind,
    pub base_chips: i64,
    pub base_mult: f64,
    pub level_chips: i64,
    pub level_mult: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRule {
    pub rank: Rank,
    pub chips: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlindRule {
    pub kind: BlindKind,
    pub target_mult: f32,
    pub hands: u8,
    pub discards: u8,
    pub reward: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnteRule {
    pub ante: u8,
    pub base_target: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomyRule {
    pub per_hand_reward: i64,
    pub interest_step: i64,
    pub interest_per: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShopItemKind {
    Joker,
    Tarot,
    Planet,
    Spectral,
    PlayingCard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemWeight {
    pub kind: ShopItemKind,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RarityWeight {
    pub rarity: JokerRarity,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopRule {
    pub card_slots: u8,
    pub pack_slots: u8,
    pub item_weights: Vec<ItemWeight>,
    pub rarity_weights: Vec<RarityWeight>,
    pub playing_card_price: i64,
    pub pack_price: i64,
    pub pack_options: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub hands: Vec<HandRule>,
    pub ranks: Vec<RankRule>,
    pub blinds: Vec<BlindRule>,
    pub antes: Vec<AnteRule>,
    pub economy: EconomyRule,
    pub shop: ShopRule,
}

impl GameConfig {
    pub fn blind_rule(&self, kind: BlindKind) -> Option<&BlindRule> {
        self.blinds.iter().find(|rule| rule.kind == kind)
    }

    pub fn ante_rule(&self, ante: u8) -> Option<&AnteRule> {
        self.antes.iter().find(|rule| rule.ante == ante)
    }

    pub fn target_for(&self, ante: u8, kind: BlindKind) -> Option<i64> {
        let base = self.ante_rule(ante)?.base_target;
        let mult = self.blind_rule(kind)?.target_mult;
        Some((base as f32 * mult).round() as i64)
    }

    pub fn max_ante(&self) -> Option<u8> {
        self.antes.iter().map(|rule| rule.ante).max()
    }

    /// The stock ruleset: eight antes with escalating targets, three
    /// blinds per ante at x1.0/x1.5/x2.0, four hands and two discards.
    pub fn standard() -> Self {
        let hands = vec![
            hand_rule(HandKind::HighCard, 5, 1.0, 10, 1.0),
            hand_rule(HandKind::Pair, 10, 2.0, 15, 1.0),
            hand_rule(HandKind::TwoPair, 20, 2.0, 20, 1.0),
            hand_rule(HandKind::Trips, 30, 3.0, 20, 2.0),
            hand_rule(HandKind::Straight, 30, 4.0, 30, 3.0),
            hand_rule(HandKind::Flush, 35, 4.0, 15, 2.0),
            hand_rule(HandKind::FullHouse, 40, 4.0, 25, 2.0),
            hand_rule(HandKind::Quads, 60, 7.0, 30, 3.0),
            hand_rule(HandKind::StraightFlush, 100, 8.0, 40, 4.0),
            hand_rule(HandKind::FiveOfAKind, 120, 12.0, 35, 3.0),
            hand_rule(HandKind::FlushHouse, 140, 14.0, 40, 4.0),
            hand_rule(HandKind::FlushFive, 160, 16.0, 50, 3.0),
        ];
        let ranks = Rank::ALL
            .iter()
            .map(|&rank| RankRule {
                rank,
                chips: rank.chips(),
            })
            .collect();
        let blinds = vec![
            BlindRule {
                kind: BlindKind::Small,
                target_mult: 1.0,
                hands: 4,
                discards: 2,
                reward: 3,
            },
            BlindRule {
                kind: BlindKind::Big,
                target_mult: 1.5,
                hands: 4,
                discards: 2,
                reward: 4,
            },
            BlindRule {
                kind: BlindKind::Boss,
                target_mult: 2.0,
                hands: 4,
                discards: 2,
                reward: 5,
            },
        ];
        let targets = [300, 800, 2000, 5000, 11000, 20000, 35000, 50000];
        let antes = targets
            .iter()
            .enumerate()
            .map(|(idx, &base_target)| AnteRule {
                ante: idx as u8 + 1,
                base_target,
            })
            .collect();
        Self {
            hands,
            ranks,
            blinds,
            antes,
            economy: EconomyRule {
                per_hand_reward: 1,
                interest_step: 5,
                interest_per: 1,
            },
            shop: ShopRule {
                card_slots: 3,
                pack_slots: 1,
                item_weights: vec![
                    ItemWeight {
                        kind: ShopItemKind::Joker,
                        weight: 4,
                    },
                    ItemWeight {
                        kind: ShopItemKind::Tarot,
                        weight: 2,
                    },
                    ItemWeight {
                        kind: ShopItemKind::Planet,
                        weight: 2,
                    },
                    ItemWeight {
                        kind: ShopItemKind::Spectral,
                        weight: 1,
                    },
                    ItemWeight {
                        kind: ShopItemKind::PlayingCard,
                        weight: 1,
                    },
                ],
                rarity_weights: vec![
                    RarityWeight {
                        rarity: JokerRarity::Common,
                        weight: 70,
                    },
                    RarityWeight {
                        rarity: JokerRarity::Uncommon,
                        weight: 25,
                    },
                    RarityWeight {
                        rarity: JokerRarity::Rare,
                        weight: 5,
                    },
                ],
                playing_card_price: 1,
                pack_price: 4,
                pack_options: 3,
            },
        }
    }
}

fn hand_rule(
    kind: HandKind,
    base_chips: i64,
    base_mult: f64,
    level_chips: i64,
    level_mult: f64,
) -> HandRule {
    HandRule {
        kind,
        base_chips,
        base_mult,
        level_chips,
        level_mult,
    }
}
