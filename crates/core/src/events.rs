use crate::{BlindKind, ConsumableKind, HandKind};
use serde::{Deserialize, Serialize};

/// Structured reports of what the engine did, for the front-end to drain
/// and render however it likes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    BlindStarted {
        ante: u8,
        blind: BlindKind,
        target: i64,
        hands: u8,
        discards: u8,
    },
    HandPlayed {
        hand: HandKind,
        chips: i64,
        mult: f64,
        total: i64,
    },
    Discarded {
        count: usize,
    },
    BlindCleared {
        score: i64,
        reward: i64,
        money: i64,
    },
    BlindFailed {
        score: i64,
    },
    ItemBought {
        name: String,
        price: i64,
        money: i64,
    },
    PackOpened {
        options: usize,
    },
    PackChosen {
        name: String,
    },
    JokerSold {
        id: String,
        value: i64,
        money: i64,
    },
    ConsumableUsed {
        kind: ConsumableKind,
        id: String,
    },
    RunWon {
        ante: u8,
        money: i64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
