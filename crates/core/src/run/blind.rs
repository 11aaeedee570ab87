use super::{RunError, RunState};
use crate::{BlindKind, Event, EventBus, ShopState, Stage};

impl RunState {
    /// Reset per-blind state and deal the opening hand. The target falls
    /// back to 0 only if config is missing the ante row, which `exit_shop`
    /// guards against before calling.
    pub(crate) fn begin_blind(&mut self, events: &mut EventBus) {
        let (hands, discards) = self
            .config
            .blind_rule(self.state.blind)
            .map(|rule| (rule.hands, rule.discards))
            .unwrap_or((4, 2));
        let target = self
            .config
            .target_for(self.state.ante, self.state.blind)
            .unwrap_or(0);

        self.state.target = target;
        self.state.blind_score = 0;
        self.state.hands_left = hands;
        self.state.discards_left = discards;
        self.state.hands_max = hands;
        self.state.discards_max = discards;
        self.state.stage = Stage::Playing;
        self.hand.clear();
        self.selected.clear();
        self.shop = None;
        self.open_pack = None;
        self.deck.reset_from_template(&mut self.rng);
        self.refill_hand();

        events.push(Event::BlindStarted {
            ante: self.state.ante,
            blind: self.state.blind,
            target,
            hands,
            discards,
        });
    }

    /// Leave the shop and roll into the next blind: round and blind
    /// advance, Boss rolls the ante over, and clearing the final ante ends
    /// the run in `CashOut`.
    pub fn exit_shop(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.stage != Stage::Shop {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        let (next_ante, next_blind) = match self.state.blind {
            BlindKind::Small => (self.state.ante, BlindKind::Big),
            BlindKind::Big => (self.state.ante, BlindKind::Boss),
            BlindKind::Boss => (self.state.ante.saturating_add(1), BlindKind::Small),
        };
        let max_ante = self.config.max_ante().unwrap_or(0);
        if next_ante > max_ante {
            self.state.round = self.state.round.saturating_add(1);
            self.state.stage = Stage::CashOut;
            self.shop = None;
            events.push(Event::RunWon {
                ante: self.state.ante,
                money: self.state.money,
            });
            return Ok(());
        }
        if self.config.ante_rule(next_ante).is_none() {
            return Err(RunError::MissingAnteRule(next_ante));
        }
        self.state.round = self.state.round.saturating_add(1);
        self.state.ante = next_ante;
        self.state.blind = next_blind;
        self.begin_blind(events);
        Ok(())
    }

    /// Blind-clear payout: flat blind reward, plus one per unused hand,
    /// plus interest on banked money.
    pub(crate) fn reward_for_clear(&self) -> i64 {
        let base = self
            .config
            .blind_rule(self.state.blind)
            .map(|rule| rule.reward)
            .unwrap_or(0);
        let per_hand = self.config.economy.per_hand_reward * self.state.hands_left as i64;
        base + per_hand + self.interest_earned()
    }

    pub(crate) fn interest_earned(&self) -> i64 {
        let economy = &self.config.economy;
        if economy.interest_step <= 0 {
            return 0;
        }
        (self.state.money / economy.interest_step).max(0) * economy.interest_per
    }

    /// Settle the blind after a scored hand: met the target, ran out of
    /// hands, or keep playing.
    pub(crate) fn settle_after_play(&mut self, events: &mut EventBus) {
        if self.state.blind_score >= self.state.target {
            let reward = self.reward_for_clear();
            self.state.money += reward;
            self.shop = Some(ShopState::generate(
                &self.config.shop,
                &self.content,
                &mut self.rng,
            ));
            self.state.stage = Stage::Shop;
            events.push(Event::BlindCleared {
                score: self.state.blind_score,
                reward,
                money: self.state.money,
            });
        } else if self.state.hands_left == 0 {
            self.state.stage = Stage::GameOver;
            events.push(Event::BlindFailed {
                score: self.state.blind_score,
            });
        } else {
            self.refill_hand();
        }
    }
}
