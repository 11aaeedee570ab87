use super::{RunError, RunState};
use crate::{score_base, Event, EventBus, JokerHook, ScoreBreakdown, ScoreEffect, Stage};

impl RunState {
    /// Toggle a hand card into the selection. Selecting a sixth card is
    /// rejected, not capped; re-selecting is a no-op.
    pub fn select_card(&mut self, index: usize) -> Result<(), RunError> {
        if self.state.stage != Stage::Playing {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        if index >= self.hand.len() {
            return Err(RunError::InvalidCardIndex);
        }
        if self.selected.contains(&index) {
            return Ok(());
        }
        if self.selected.len() >= 5 {
            return Err(RunError::SelectionFull);
        }
        self.selected.push(index);
        Ok(())
    }

    pub fn deselect_card(&mut self, index: usize) -> Result<(), RunError> {
        if self.state.stage != Stage::Playing {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        if index >= self.hand.len() {
            return Err(RunError::InvalidCardIndex);
        }
        self.selected.retain(|&idx| idx != index);
        Ok(())
    }

    /// Evaluation preview of the current selection, before joker effects.
    /// Recomputed from scratch on demand; never incrementally maintained.
    pub fn selected_hand(&self) -> ScoreBreakdown {
        let cards: Vec<crate::Card> = self.selected.iter().map(|&idx| self.hand[idx]).collect();
        score_base(&cards, &self.tables, &self.hand_levels)
    }

    /// Play the selected cards: evaluate, run the joker pipeline, add to
    /// the blind score, then settle the blind outcome.
    pub fn play_hand(&mut self, events: &mut EventBus) -> Result<ScoreBreakdown, RunError> {
        if self.state.stage != Stage::Playing {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        if self.state.hands_left == 0 {
            return Err(RunError::NoHandsLeft);
        }
        if self.selected.is_empty() {
            return Err(RunError::EmptySelection);
        }

        let played = self.take_selected();
        let mut breakdown = score_base(&played, &self.tables, &self.hand_levels);
        let mut total = breakdown.total.clone();
        self.last_score_trace.clear();

        // Independent jokers fire once, in collection order; then scored
        // jokers once per scoring card, outer loop cards in selection
        // order, inner loop jokers in collection order; then held jokers
        // over the unplayed hand the same way. This nesting fixes the
        // accumulation order for deterministic replays.
        let mut applications: Vec<(String, ScoreEffect)> = Vec::new();
        for joker in &self.inventory.jokers {
            if let Some(def) = self.content.joker_by_id(&joker.id) {
                if let JokerHook::Independent(effect) = &def.hook {
                    applications.push((format!("joker:{}", joker.id), effect.clone()));
                }
            }
        }
        for &idx in &breakdown.scoring_indices {
            let card = played[idx];
            for joker in &self.inventory.jokers {
                if let Some(def) = self.content.joker_by_id(&joker.id) {
                    if let JokerHook::OnScored { filter, effect } = &def.hook {
                        if filter.matches(card) {
                            applications.push((format!("joker:{}", joker.id), effect.clone()));
                        }
                    }
                }
            }
        }
        for &card in &self.hand {
            for joker in &self.inventory.jokers {
                if let Some(def) = self.content.joker_by_id(&joker.id) {
                    if let JokerHook::OnHeld { filter, effect } = &def.hook {
                        if filter.matches(card) {
                            applications.push((format!("joker:{}", joker.id), effect.clone()));
                        }
                    }
                }
            }
        }
        for (source, effect) in applications {
            self.apply_effect(&mut total, effect, &source);
        }

        let contribution = total.total();
        self.state.blind_score += contribution;
        self.state.hands_left -= 1;
        breakdown.total = total.clone();
        events.push(Event::HandPlayed {
            hand: breakdown.hand,
            chips: total.chips,
            mult: total.mult,
            total: contribution,
        });

        self.settle_after_play(events);
        Ok(breakdown)
    }

    /// Discard the selected cards and refill. The discarded cards are gone
    /// until the next blind restores the deck from the template.
    pub fn discard_hand(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if self.state.stage != Stage::Playing {
            return Err(RunError::InvalidStage(self.state.stage));
        }
        if self.state.discards_left == 0 {
            return Err(RunError::NoDiscardsLeft);
        }
        if self.selected.is_empty() {
            return Err(RunError::EmptySelection);
        }
        let discarded = self.take_selected();
        self.state.discards_left -= 1;
        self.refill_hand();
        events.push(Event::Discarded {
            count: discarded.len(),
        });
        Ok(())
    }

    pub(crate) fn refill_hand(&mut self) {
        while self.hand.len() < self.state.hand_size {
            match self.deck.draw_card() {
                Some(card) => self.hand.push(card),
                None => break,
            }
        }
    }

    /// Remove the selected cards from the hand, returning them in
    /// selection order, and clear the selection.
    fn take_selected(&mut self) -> Vec<crate::Card> {
        let taken: Vec<crate::Card> = self.selected.iter().map(|&idx| self.hand[idx]).collect();
        let mut indices = std::mem::take(&mut self.selected);
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for idx in indices {
            self.hand.remove(idx);
        }
        taken
    }
}
