use crate::{Card, Rank, RngState, Suit};

/// The working draw pile plus the persistent full-deck template.
///
/// The draw pile is consumed by deals and refilled from the template at
/// blind start. The template only grows (playing-card purchases, copy
/// effects) or permanently shrinks (destruction effects).
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub draw: Vec<Card>,
    pub template: Vec<Card>,
}

impl Deck {
    /// Standard 52-card deck, assigning ids from `next_id` onward.
    pub fn standard52(next_id: &mut u32) -> Self {
        let mut template = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let mut card = Card::standard(suit, rank);
                card.id = *next_id;
                *next_id = next_id.saturating_add(1);
                template.push(card);
            }
        }
        Self {
            draw: template.clone(),
            template,
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.draw);
    }

    /// Take the top card. Exhaustion is non-fatal; the caller simply deals
    /// a short hand.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    /// Restore the working pile from the template and reshuffle.
    pub fn reset_from_template(&mut self, rng: &mut RngState) {
        self.draw = self.template.clone();
        self.shuffle(rng);
    }

    pub fn add_to_template(&mut self, card: Card) {
        self.template.push(card);
    }

    /// Permanently remove a card from the template (destruction effects).
    pub fn remove_from_template(&mut self, id: u32) {
        self.template.retain(|card| card.id != id);
    }

    /// Apply a mutation to the template copy of a card, keeping it in sync
    /// with an upgraded hand card.
    pub fn update_template(&mut self, id: u32, f: impl FnOnce(&mut Card)) {
        if let Some(card) = self.template.iter_mut().find(|card| card.id == id) {
            f(card);
        }
    }
}
