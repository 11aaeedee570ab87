use super::{RunError, RunState};
use crate::{PackOption, ShopOffer};
use serde::{Deserialize, Serialize};

/// Addressable item collections for display queries and reordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Section {
    Hand,
    Jokers,
    Consumables,
    Shop,
    Pack,
}

/// Display-ready tuple for one item slot. The core computes what to
/// display, never how.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInfo {
    pub name: String,
    pub description: String,
    pub price: i64,
}

impl RunState {
    pub fn item_info(&self, section: Section, index: usize) -> Option<ItemInfo> {
        match section {
            Section::Hand => {
                let card = self.hand.get(index)?;
                Some(ItemInfo {
                    name: card.label(),
                    description: format!("+{} chips when scored", card.rank.chips()),
                    price: 0,
                })
            }
            Section::Jokers => {
                let joker = self.inventory.jokers.get(index)?;
                let def = self.content.joker_by_id(&joker.id)?;
                Some(ItemInfo {
                    name: def.name.clone(),
                    description: def.description.clone(),
                    price: def.price,
                })
            }
            Section::Consumables => {
                let item = self.inventory.consumables.get(index)?;
                let def = self.content.consumable_by_id(item.kind, &item.id)?;
                Some(ItemInfo {
                    name: def.name.clone(),
                    description: def.description.clone(),
                    price: def.price,
                })
            }
            Section::Shop => {
                let offer = self.shop.as_ref()?.offers.get(index)?;
                match offer {
                    ShopOffer::Joker { id, price, .. } => {
                        let def = self.content.joker_by_id(id)?;
                        Some(ItemInfo {
                            name: def.name.clone(),
                            description: def.description.clone(),
                            price: *price,
                        })
                    }
                    ShopOffer::Consumable { id, kind, price } => {
                        let def = self.content.consumable_by_id(*kind, id)?;
                        Some(ItemInfo {
                            name: def.name.clone(),
                            description: def.description.clone(),
                            price: *price,
                        })
                    }
                    ShopOffer::PlayingCard { card, price } => Some(ItemInfo {
                        name: card.label(),
                        description: "Added to your deck".to_string(),
                        price: *price,
                    }),
                    ShopOffer::Pack { price } => Some(ItemInfo {
                        name: "Booster Pack".to_string(),
                        description: "Open for a choice of one item".to_string(),
                        price: *price,
                    }),
                }
            }
            Section::Pack => {
                let option = self.open_pack.as_ref()?.options.get(index)?;
                match option {
                    PackOption::Joker(id) => {
                        let def = self.content.joker_by_id(id)?;
                        Some(ItemInfo {
                            name: def.name.clone(),
                            description: def.description.clone(),
                            price: 0,
                        })
                    }
                    PackOption::Consumable(kind, id) => {
                        let def = self.content.consumable_by_id(*kind, id)?;
                        Some(ItemInfo {
                            name: def.name.clone(),
                            description: def.description.clone(),
                            price: 0,
                        })
                    }
                }
            }
        }
    }

    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Hand => self.hand.len(),
            Section::Jokers => self.inventory.jokers.len(),
            Section::Consumables => self.inventory.consumables.len(),
            Section::Shop => self.shop.as_ref().map(|s| s.offers.len()).unwrap_or(0),
            Section::Pack => self.open_pack.as_ref().map(|p| p.options.len()).unwrap_or(0),
        }
    }

    /// Reorder within the hand, joker, or consumable collections. Joker
    /// order is activation order, so this is a strategic operation, not a
    /// cosmetic one. Hand selection indices are remapped to follow the
    /// moved card.
    pub fn move_item(
        &mut self,
        section: Section,
        from: usize,
        to: usize,
    ) -> Result<(), RunError> {
        let len = self.section_len(section);
        if from >= len || to >= len {
            return Err(RunError::InvalidItemIndex);
        }
        match section {
            Section::Hand => {
                let card = self.hand.remove(from);
                self.hand.insert(to, card);
                for idx in &mut self.selected {
                    *idx = remap_index(*idx, from, to);
                }
            }
            Section::Jokers => {
                let joker = self.inventory.jokers.remove(from);
                self.inventory.jokers.insert(to, joker);
            }
            Section::Consumables => {
                let item = self.inventory.consumables.remove(from);
                self.inventory.consumables.insert(to, item);
            }
            Section::Shop | Section::Pack => return Err(RunError::ImmovableSection),
        }
        Ok(())
    }
}

fn remap_index(idx: usize, from: usize, to: usize) -> usize {
    if idx == from {
        to
    } else if from < idx && idx <= to {
        idx - 1
    } else if to <= idx && idx < from {
        idx + 1
    } else {
        idx
    }
}
