use crate::{ConsumableKind, JokerRarity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An owned joker. Collection order is activation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JokerInstance {
    pub id: String,
    pub rarity: JokerRarity,
    pub buy_price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumableInstance {
    pub id: String,
    pub kind: ConsumableKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub joker_slots: usize,
    pub consumable_slots: usize,
    pub jokers: Vec<JokerInstance>,
    pub consumables: Vec<ConsumableInstance>,
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("no joker slots")]
    NoJokerSlots,
    #[error("no consumable slots")]
    NoConsumableSlots,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_slots(5, 2)
    }

    pub fn with_slots(joker_slots: usize, consumable_slots: usize) -> Self {
        Self {
            joker_slots,
            consumable_slots,
            jokers: Vec::new(),
            consumables: Vec::new(),
        }
    }

    pub fn add_joker(
        &mut self,
        id: String,
        rarity: JokerRarity,
        buy_price: i64,
    ) -> Result<(), InventoryError> {
        if self.jokers.len() >= self.joker_slots {
            return Err(InventoryError::NoJokerSlots);
        }
        self.jokers.push(JokerInstance {
            id,
            rarity,
            buy_price,
        });
        Ok(())
    }

    pub fn add_consumable(
        &mut self,
        id: String,
        kind: ConsumableKind,
    ) -> Result<(), InventoryError> {
        if self.consumables.len() >= self.consumable_slots {
            return Err(InventoryError::NoConsumableSlots);
        }
        self.consumables.push(ConsumableInstance { id, kind });
        Ok(())
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
