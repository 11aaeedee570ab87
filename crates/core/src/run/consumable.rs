use super::{RunError, RunState};
use crate::{ConsumableEffect, Event, EventBus, Stage};

impl RunState {
    /// Use the consumable at `index`. Target-taking effects read the
    /// current hand selection, which must match the def's target count
    /// exactly; zero-target effects require an empty selection. Consuming
    /// is irreversible: the instance is removed on success.
    pub fn use_consumable(&mut self, index: usize, events: &mut EventBus) -> Result<(), RunError> {
        if matches!(self.state.stage, Stage::GameOver | Stage::CashOut | Stage::PackOpening) {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        let instance = self
            .inventory
            .consumables
            .get(index)
            .cloned()
            .ok_or(RunError::InvalidItemIndex)?;
        let def = self
            .content
            .consumable_by_id(instance.kind, &instance.id)
            .ok_or(RunError::InvalidItemIndex)?;
        // Context-free defs (targets 0) demand an empty selection, so a
        // rejected call never wipes a selection the player still wants.
        if self.selected.len() != def.targets as usize {
            return Err(RunError::InvalidTargetCount);
        }
        let effect = def.effect.clone();

        match effect {
            ConsumableEffect::DoubleMoney { cap } => {
                if self.state.money > 0 {
                    self.state.money += self.state.money.min(cap);
                }
            }
            ConsumableEffect::AddMoney(amount) => {
                self.state.money += amount;
            }
            ConsumableEffect::UpgradeHand { hand, amount } => {
                self.upgrade_hand_level(hand, amount);
            }
            ConsumableEffect::UpgradeAllHands { amount } => {
                for kind in crate::HandKind::ALL {
                    self.upgrade_hand_level(kind, amount);
                }
            }
            ConsumableEffect::IncreaseSelectedRank => {
                for &idx in &self.selected.clone() {
                    let next = self.hand[idx].rank.next();
                    let id = self.hand[idx].id;
                    self.hand[idx].rank = next;
                    self.deck.update_template(id, |card| card.rank = next);
                }
            }
            ConsumableEffect::ConvertSelectedSuit(suit) => {
                for &idx in &self.selected.clone() {
                    let id = self.hand[idx].id;
                    self.hand[idx].suit = suit;
                    self.deck.update_template(id, |card| card.suit = suit);
                }
            }
            ConsumableEffect::CopySelected => {
                // Deep copy: same face, fresh identity, joins hand and
                // template alike.
                for &idx in &self.selected.clone() {
                    let mut copy = self.hand[idx];
                    copy.id = self.alloc_card_id();
                    self.deck.add_to_template(copy);
                    self.hand.push(copy);
                }
            }
            ConsumableEffect::DestroySelected => {
                let mut indices = self.selected.clone();
                indices.sort_unstable_by(|a, b| b.cmp(a));
                for idx in indices {
                    let card = self.hand.remove(idx);
                    self.deck.remove_from_template(card.id);
                }
            }
        }

        self.selected.clear();
        self.inventory.consumables.remove(index);
        events.push(Event::ConsumableUsed {
            kind: instance.kind,
            id: instance.id,
        });
        Ok(())
    }
}
