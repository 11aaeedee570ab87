use super::{RunError, RunState};
use crate::{generate_pack, Event, EventBus, PackOption, ShopOffer, Stage};

impl RunState {
    /// Buy the offer at `index`: price and capacity are checked before any
    /// mutation, so a failed purchase leaves everything unchanged.
    pub fn buy_item(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.stage != Stage::Shop {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        let offer = self
            .shop
            .as_ref()
            .and_then(|shop| shop.offers.get(index))
            .cloned()
            .ok_or(RunError::InvalidOfferIndex)?;
        let price = offer.price();
        if self.state.money < price {
            return Err(RunError::NotEnoughMoney);
        }

        let name = match &offer {
            ShopOffer::Joker { id, rarity, price } => {
                let def = self
                    .content
                    .joker_by_id(id)
                    .ok_or(RunError::InvalidOfferIndex)?;
                let name = def.name.clone();
                self.inventory.add_joker(id.clone(), *rarity, *price)?;
                name
            }
            ShopOffer::Consumable { id, kind, .. } => {
                let def = self
                    .content
                    .consumable_by_id(*kind, id)
                    .ok_or(RunError::InvalidOfferIndex)?;
                let name = def.name.clone();
                self.inventory.add_consumable(id.clone(), *kind)?;
                name
            }
            ShopOffer::PlayingCard { card, .. } => {
                let mut card = *card;
                card.id = self.alloc_card_id();
                self.deck.add_to_template(card);
                card.label()
            }
            ShopOffer::Pack { .. } => {
                let pack = generate_pack(&self.config.shop, &self.content, &mut self.rng);
                events.push(Event::PackOpened {
                    options: pack.options.len(),
                });
                self.open_pack = Some(pack);
                self.state.stage = Stage::PackOpening;
                "Booster Pack".to_string()
            }
        };

        self.state.money -= price;
        if let Some(shop) = self.shop.as_mut() {
            shop.offers.remove(index);
        }
        events.push(Event::ItemBought {
            name,
            price,
            money: self.state.money,
        });
        Ok(())
    }

    /// Take one option from the open pack and return to the shop. A full
    /// inventory leaves the pack open so another option can be taken.
    pub fn pick_pack_option(
        &mut self,
        index: usize,
        events: &mut EventBus,
    ) -> Result<(), RunError> {
        if self.state.stage != Stage::PackOpening {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        let option = self
            .open_pack
            .as_ref()
            .and_then(|pack| pack.options.get(index))
            .cloned()
            .ok_or(RunError::InvalidPackOption)?;

        let name = match &option {
            PackOption::Joker(id) => {
                let def = self
                    .content
                    .joker_by_id(id)
                    .ok_or(RunError::InvalidPackOption)?;
                let (name, rarity, price) = (def.name.clone(), def.rarity, def.price);
                self.inventory.add_joker(id.clone(), rarity, price)?;
                name
            }
            PackOption::Consumable(kind, id) => {
                let def = self
                    .content
                    .consumable_by_id(*kind, id)
                    .ok_or(RunError::InvalidPackOption)?;
                let name = def.name.clone();
                self.inventory.add_consumable(id.clone(), *kind)?;
                name
            }
        };

        self.open_pack = None;
        self.state.stage = Stage::Shop;
        events.push(Event::PackChosen { name });
        Ok(())
    }

    /// Close the pack without taking anything.
    pub fn skip_pack(&mut self) -> Result<(), RunError> {
        if self.state.stage != Stage::PackOpening {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        self.open_pack = None;
        self.state.stage = Stage::Shop;
        Ok(())
    }

    /// Sell an owned joker for half its buy price (at least one). Locked
    /// once the run has ended and while a pack choice is pending.
    pub fn sell_joker(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        if matches!(
            self.state.stage,
            Stage::GameOver | Stage::CashOut | Stage::PackOpening
        ) {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        if index >= self.inventory.jokers.len() {
            return Err(RunError::InvalidItemIndex);
        }
        let joker = self.inventory.jokers.remove(index);
        let value = (joker.buy_price / 2).max(1);
        self.state.money += value;
        events.push(Event::JokerSold {
            id: joker.id,
            value,
            money: self.state.money,
        });
        Ok(())
    }
}
