use crate::{
    CardFilter, ConsumableEffect, ConsumableKind, HandKind, JokerHook, JokerRarity, Rank,
    RngState, ScoreEffect, Suit,
};

#[derive(Debug, Clone)]
pub struct JokerDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: JokerRarity,
    pub price: i64,
    pub hook: JokerHook,
}

#[derive(Debug, Clone)]
pub struct ConsumableDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: ConsumableKind,
    /// Selected cards required before use: 0 (context-free), 1, or 2.
    pub targets: u8,
    pub price: i64,
    pub effect: ConsumableEffect,
}

/// Static effect catalog. Definitions are keyed by id; owned instances in
/// the inventory reference them by id only.
#[derive(Debug, Clone)]
pub struct Content {
    pub jokers: Vec<JokerDef>,
    pub tarots: Vec<ConsumableDef>,
    pub planets: Vec<ConsumableDef>,
    pub spectrals: Vec<ConsumableDef>,
}

fn joker(
    id: &str,
    name: &str,
    description: &str,
    rarity: JokerRarity,
    price: i64,
    hook: JokerHook,
) -> JokerDef {
    JokerDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        rarity,
        price,
        hook,
    }
}

fn consumable(
    id: &str,
    name: &str,
    description: &str,
    kind: ConsumableKind,
    targets: u8,
    price: i64,
    effect: ConsumableEffect,
) -> ConsumableDef {
    ConsumableDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        kind,
        targets,
        price,
        effect,
    }
}

fn suit_joker(id: &str, name: &str, suit: Suit) -> JokerDef {
    joker(
        id,
        name,
        &format!("Played cards with {} suit give +3 Mult when scored", suit.name()),
        JokerRarity::Common,
        5,
        JokerHook::OnScored {
            filter: CardFilter::OfSuit(suit),
            effect: ScoreEffect::AddMult(3.0),
        },
    )
}

fn planet(id: &str, name: &str, hand: HandKind) -> ConsumableDef {
    consumable(
        id,
        name,
        &format!("Level up {}", hand.name()),
        ConsumableKind::Planet,
        0,
        3,
        ConsumableEffect::UpgradeHand { hand, amount: 1 },
    )
}

impl Content {
    /// The built-in catalog. Flavor text lives here with the defs; the
    /// engine only reads ids, prices, target counts, and hooks.
    pub fn builtin() -> Self {
        let jokers = vec![
            joker(
                "joker",
                "Joker",
                "+4 Mult",
                JokerRarity::Common,
                2,
                JokerHook::Independent(ScoreEffect::AddMult(4.0)),
            ),
            suit_joker("greedy_joker", "Greedy Joker", Suit::Diamonds),
            suit_joker("lusty_joker", "Lusty Joker", Suit::Hearts),
            suit_joker("wrathful_joker", "Wrathful Joker", Suit::Spades),
            suit_joker("gluttonous_joker", "Gluttonous Joker", Suit::Clubs),
            joker(
                "sly_joker",
                "Sly Joker",
                "+50 Chips",
                JokerRarity::Common,
                3,
                JokerHook::Independent(ScoreEffect::AddChips(50)),
            ),
            joker(
                "scary_face",
                "Scary Face",
                "Played face cards give +30 Chips when scored",
                JokerRarity::Uncommon,
                4,
                JokerHook::OnScored {
                    filter: CardFilter::Face,
                    effect: ScoreEffect::AddChips(30),
                },
            ),
            joker(
                "smiley_face",
                "Smiley Face",
                "Played face cards give +5 Mult when scored",
                JokerRarity::Uncommon,
                4,
                JokerHook::OnScored {
                    filter: CardFilter::Face,
                    effect: ScoreEffect::AddMult(5.0),
                },
            ),
            joker(
                "even_keeled",
                "Even Keeled",
                "Played Aces give +4 Mult when scored",
                JokerRarity::Uncommon,
                5,
                JokerHook::OnScored {
                    filter: CardFilter::OfRank(Rank::Ace),
                    effect: ScoreEffect::AddMult(4.0),
                },
            ),
            joker(
                "stuntman",
                "Stuntman",
                "+250 Chips",
                JokerRarity::Rare,
                7,
                JokerHook::Independent(ScoreEffect::AddChips(250)),
            ),
        ];

        let tarots = vec![
            consumable(
                "the_hermit",
                "The Hermit",
                "Double your money (max +$20)",
                ConsumableKind::Tarot,
                0,
                3,
                ConsumableEffect::DoubleMoney { cap: 20 },
            ),
            consumable(
                "the_empress",
                "The Empress",
                "Gain $5",
                ConsumableKind::Tarot,
                0,
                3,
                ConsumableEffect::AddMoney(5),
            ),
            consumable(
                "strength",
                "Strength",
                "Raise the rank of 2 selected cards by one",
                ConsumableKind::Tarot,
                2,
                3,
                ConsumableEffect::IncreaseSelectedRank,
            ),
            consumable(
                "the_star",
                "The Star",
                "Convert 1 selected card to Diamonds",
                ConsumableKind::Tarot,
                1,
                3,
                ConsumableEffect::ConvertSelectedSuit(Suit::Diamonds),
            ),
            consumable(
                "the_sun",
                "The Sun",
                "Convert 1 selected card to Hearts",
                ConsumableKind::Tarot,
                1,
                3,
                ConsumableEffect::ConvertSelectedSuit(Suit::Hearts),
            ),
            consumable(
                "the_moon",
                "The Moon",
                "Convert 1 selected card to Clubs",
                ConsumableKind::Tarot,
                1,
                3,
                ConsumableEffect::ConvertSelectedSuit(Suit::Clubs),
            ),
            consumable(
                "the_world",
                "The World",
                "Convert 1 selected card to Spades",
                ConsumableKind::Tarot,
                1,
                3,
                ConsumableEffect::ConvertSelectedSuit(Suit::Spades),
            ),
        ];

        let planets = vec![
            planet("pluto", "Pluto", HandKind::HighCard),
            planet("mercury", "Mercury", HandKind::Pair),
            planet("uranus", "Uranus", HandKind::TwoPair),
            planet("venus", "Venus", HandKind::Trips),
            planet("saturn", "Saturn", HandKind::Straight),
            planet("jupiter", "Jupiter", HandKind::Flush),
            planet("earth", "Earth", HandKind::FullHouse),
            planet("mars", "Mars", HandKind::Quads),
            planet("neptune", "Neptune", HandKind::StraightFlush),
            planet("planet_x", "Planet X", HandKind::FiveOfAKind),
            planet("ceres", "Ceres", HandKind::FlushHouse),
            planet("eris", "Eris", HandKind::FlushFive),
        ];

        let spectrals = vec![
            consumable(
                "cryptid",
                "Cryptid",
                "Create an exact copy of 1 selected card",
                ConsumableKind::Spectral,
                1,
                4,
                ConsumableEffect::CopySelected,
            ),
            consumable(
                "immolate",
                "Immolate",
                "Destroy 2 selected cards",
                ConsumableKind::Spectral,
                2,
                4,
                ConsumableEffect::DestroySelected,
            ),
            consumable(
                "black_hole",
                "Black Hole",
                "Upgrade every poker hand by one level",
                ConsumableKind::Spectral,
                0,
                4,
                ConsumableEffect::UpgradeAllHands { amount: 1 },
            ),
        ];

        Self {
            jokers,
            tarots,
            planets,
            spectrals,
        }
    }

    pub fn joker_by_id(&self, id: &str) -> Option<&JokerDef> {
        self.jokers.iter().find(|def| def.id == id)
    }

    pub fn consumable_by_id(&self, kind: ConsumableKind, id: &str) -> Option<&ConsumableDef> {
        self.pool(kind).iter().find(|def| def.id == id)
    }

    pub fn pick_joker<'a>(
        &'a self,
        rarity: JokerRarity,
        rng: &mut RngState,
    ) -> Option<&'a JokerDef> {
        let indices: Vec<usize> = self
            .jokers
            .iter()
            .enumerate()
            .filter(|(_, def)| def.rarity == rarity)
            .map(|(idx, _)| idx)
            .collect();
        pick_index(&indices, rng).map(|idx| &self.jokers[idx])
    }

    pub fn pick_consumable<'a>(
        &'a self,
        kind: ConsumableKind,
        rng: &mut RngState,
    ) -> Option<&'a ConsumableDef> {
        let pool = self.pool(kind);
        let indices: Vec<usize> = (0..pool.len()).collect();
        pick_index(&indices, rng).map(|idx| &pool[idx])
    }

    pub fn random_standard_card(&self, rng: &mut RngState) -> crate::Card {
        let suit = Suit::ALL[rng.next_below(Suit::ALL.len() as u64) as usize];
        let rank = Rank::ALL[rng.next_below(Rank::ALL.len() as u64) as usize];
        crate::Card::standard(suit, rank)
    }

    fn pool(&self, kind: ConsumableKind) -> &[ConsumableDef] {
        match kind {
            ConsumableKind::Tarot => &self.tarots,
            ConsumableKind::Planet => &self.planets,
            ConsumableKind::Spectral => &self.spectrals,
        }
    }
}

fn pick_index(items: &[usize], rng: &mut RngState) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_below(items.len() as u64) as usize).copied()
}
