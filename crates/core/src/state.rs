use serde::{Deserialize, Serialize};

/// Lifecycle stage of the round state machine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stage {
    /// Selecting, playing, and discarding within a blind.
    Playing,
    /// Spending money after clearing a blind.
    Shop,
    /// Choosing from an opened booster pack.
    PackOpening,
    /// Terminal: hands exhausted short of the target.
    GameOver,
    /// Terminal: final ante cleared.
    CashOut,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Playing => "playing",
            Stage::Shop => "shop",
            Stage::PackOpening => "opening pack",
            Stage::GameOver => "game over",
            Stage::CashOut => "cashed out",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindKind {
    Small,
    Big,
    Boss,
}

impl BlindKind {
    pub fn name(self) -> &'static str {
        match self {
            BlindKind::Small => "Small Blind",
            BlindKind::Big => "Big Blind",
            BlindKind::Boss => "Boss Blind",
        }
    }
}

/// The round's persistent counters. Only the state machine mutates the
/// stage/ante/blind/round fields; everything else reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ante: u8,
    pub blind: BlindKind,
    pub round: u32,
    pub stage: Stage,
    pub target: i64,
    pub blind_score: i64,
    pub money: i64,
    pub hands_left: u8,
    pub discards_left: u8,
    pub hands_max: u8,
    pub discards_max: u8,
    pub hand_size: usize,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            ante: 1,
            blind: BlindKind::Small,
            round: 0,
            stage: Stage::Playing,
            target: 0,
            blind_score: 0,
            money: 4,
            hands_left: 0,
            discards_left: 0,
            hands_max: 0,
            discards_max: 0,
            hand_size: 8,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
