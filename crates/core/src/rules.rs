use serde::{Deserialize, Serialize};

/// Running chip/mult pair for a played hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Score {
    pub fn total_raw(&self) -> f64 {
        self.chips as f64 * self.mult
    }

    pub fn total(&self) -> i64 {
        self.total_raw().floor() as i64
    }

    pub fn apply(&mut self, effect: &ScoreEffect) {
        match effect {
            ScoreEffect::AddChips(value) => self.chips += value,
            ScoreEffect::AddMult(value) => self.mult += value,
            ScoreEffect::MultiplyMult(value) => self.mult *= value,
            ScoreEffect::MultiplyChips(value) => {
                self.chips = (self.chips as f64 * value).floor() as i64;
            }
        }
    }
}

/// A single score mutation. Activation order is preserved end to end so
/// multiplicative effects stack deterministically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ScoreEffect {
    AddChips(i64),
    AddMult(f64),
    MultiplyMult(f64),
    MultiplyChips(f64),
}

/// One recorded effect application, for front-end score breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreTraceStep {
    pub source: String,
    pub effect: ScoreEffect,
    pub before: Score,
    pub after: Score,
}
