use crate::{
    Card, Content, Deck, EventBus, GameConfig, GameState, HandKind, Inventory,
    InventoryError, PackOpen, RngState, Score, ScoreEffect, ScoreTables, ScoreTraceStep,
    ShopState, Stage,
};
use std::collections::HashMap;
use thiserror::Error;

mod blind;
mod consumable;
mod hand;
mod query;
mod shop;

pub use query::{ItemInfo, Section};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("action not allowed in stage {0:?}")]
    InvalidStage(Stage),
    #[error("no hands left")]
    NoHandsLeft,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("no cards selected")]
    EmptySelection,
    #[error("five cards already selected")]
    SelectionFull,
    #[error("invalid card index")]
    InvalidCardIndex,
    #[error("invalid shop offer index")]
    InvalidOfferIndex,
    #[error("invalid item index")]
    InvalidItemIndex,
    #[error("not enough money")]
    NotEnoughMoney,
    #[error("wrong number of selected targets")]
    InvalidTargetCount,
    #[error("invalid pack option")]
    InvalidPackOption,
    #[error("section cannot be reordered")]
    ImmovableSection,
    #[error("missing config for ante {0}")]
    MissingAnteRule(u8),
    #[error("inventory error: {0}")]
    Inventory(#[from] InventoryError),
}

/// The whole run in one explicitly-owned aggregate. Every entry point
/// takes `&mut self`; on a returned error the state is untouched.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub tables: ScoreTables,
    pub content: Content,
    pub inventory: Inventory,
    pub rng: RngState,
    pub deck: Deck,
    pub hand: Vec<Card>,
    /// Hand indices in selection order; at most five.
    pub selected: Vec<usize>,
    pub state: GameState,
    pub shop: Option<ShopState>,
    pub open_pack: Option<PackOpen>,
    pub hand_levels: HashMap<HandKind, u32>,
    pub last_score_trace: Vec<ScoreTraceStep>,
    next_card_id: u32,
}

impl RunState {
    /// Build a run and deal into the first blind (ante 1, Small).
    pub fn new(config: GameConfig, content: Content, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut next_card_id = 1u32;
        let mut deck = Deck::standard52(&mut next_card_id);
        deck.shuffle(&mut rng);
        let tables = ScoreTables::from_config(&config);
        let mut run = Self {
            config,
            tables,
            content,
            inventory: Inventory::new(),
            rng,
            deck,
            hand: Vec::new(),
            selected: Vec::new(),
            state: GameState::new(),
            shop: None,
            open_pack: None,
            hand_levels: HashMap::new(),
            last_score_trace: Vec::new(),
            next_card_id,
        };
        let mut setup_events = EventBus::default();
        run.begin_blind(&mut setup_events);
        run
    }

    pub(crate) fn alloc_card_id(&mut self) -> u32 {
        let id = self.next_card_id;
        self.next_card_id = self.next_card_id.saturating_add(1);
        id
    }

    pub(crate) fn hand_level(&self, kind: HandKind) -> u32 {
        self.hand_levels.get(&kind).copied().unwrap_or(1)
    }

    pub(crate) fn upgrade_hand_level(&mut self, kind: HandKind, amount: u32) {
        if amount == 0 {
            return;
        }
        let entry = self.hand_levels.entry(kind).or_insert(1);
        *entry = entry.saturating_add(amount);
    }

    pub(crate) fn apply_effect(&mut self, score: &mut Score, effect: ScoreEffect, source: &str) {
        let before = score.clone();
        score.apply(&effect);
        self.last_score_trace.push(ScoreTraceStep {
            source: source.to_string(),
            effect,
            before,
            after: score.clone(),
        });
    }
}
