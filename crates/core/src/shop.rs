use crate::{
    Card, ConsumableKind, Content, JokerRarity, RngState, ShopItemKind, ShopRule,
};

/// One purchasable slot in the shop listing.
#[derive(Debug, Clone)]
pub enum ShopOffer {
    Joker {
        id: String,
        rarity: JokerRarity,
        price: i64,
    },
    Consumable {
        id: String,
        kind: ConsumableKind,
        price: i64,
    },
    /// A playing card added to the full-deck template on purchase. The id
    /// is assigned at purchase time.
    PlayingCard { card: Card, price: i64 },
    Pack { price: i64 },
}

impl ShopOffer {
    pub fn price(&self) -> i64 {
        match self {
            ShopOffer::Joker { price, .. }
            | ShopOffer::Consumable { price, .. }
            | ShopOffer::PlayingCard { price, .. }
            | ShopOffer::Pack { price } => *price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShopState {
    pub offers: Vec<ShopOffer>,
}

/// An opened booster pack awaiting a pick.
#[derive(Debug, Clone)]
pub struct PackOpen {
    pub options: Vec<PackOption>,
}

#[derive(Debug, Clone)]
pub enum PackOption {
    Joker(String),
    Consumable(ConsumableKind, String),
}

impl ShopState {
    /// Roll a fresh listing: weighted card offers plus booster packs.
    pub fn generate(rule: &ShopRule, content: &Content, rng: &mut RngState) -> Self {
        let mut offers = Vec::new();
        for _ in 0..rule.card_slots {
            if let Some(offer) = roll_card_offer(rule, content, rng) {
                offers.push(offer);
            }
        }
        for _ in 0..rule.pack_slots {
            offers.push(ShopOffer::Pack {
                price: rule.pack_price,
            });
        }
        Self { offers }
    }
}

/// Roll the contents of a booster pack.
pub fn generate_pack(rule: &ShopRule, content: &Content, rng: &mut RngState) -> PackOpen {
    let mut options = Vec::new();
    for _ in 0..rule.pack_options {
        let option = match rng.next_below(3) {
            0 => roll_joker(rule, content, rng).map(|id| PackOption::Joker(id)),
            1 => content
                .pick_consumable(ConsumableKind::Tarot, rng)
                .map(|def| PackOption::Consumable(def.kind, def.id.clone())),
            _ => content
                .pick_consumable(ConsumableKind::Planet, rng)
                .map(|def| PackOption::Consumable(def.kind, def.id.clone())),
        };
        if let Some(option) = option {
            options.push(option);
        }
    }
    PackOpen { options }
}

fn roll_card_offer(rule: &ShopRule, content: &Content, rng: &mut RngState) -> Option<ShopOffer> {
    let total: u32 = rule.item_weights.iter().map(|w| w.weight).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.next_below(total as u64) as u32;
    let mut kind = ShopItemKind::Joker;
    for weight in &rule.item_weights {
        if roll < weight.weight {
            kind = weight.kind;
            break;
        }
        roll -= weight.weight;
    }
    match kind {
        ShopItemKind::Joker => {
            let id = roll_joker(rule, content, rng)?;
            let def = content.joker_by_id(&id)?;
            Some(ShopOffer::Joker {
                id,
                rarity: def.rarity,
                price: def.price,
            })
        }
        ShopItemKind::Tarot => roll_consumable(content, ConsumableKind::Tarot, rng),
        ShopItemKind::Planet => roll_consumable(content, ConsumableKind::Planet, rng),
        ShopItemKind::Spectral => roll_consumable(content, ConsumableKind::Spectral, rng),
        ShopItemKind::PlayingCard => Some(ShopOffer::PlayingCard {
            card: content.random_standard_card(rng),
            price: rule.playing_card_price,
        }),
    }
}

fn roll_joker(rule: &ShopRule, content: &Content, rng: &mut RngState) -> Option<String> {
    let total: u32 = rule.rarity_weights.iter().map(|w| w.weight).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.next_below(total as u64) as u32;
    let mut rarity = JokerRarity::Common;
    for weight in &rule.rarity_weights {
        if roll < weight.weight {
            rarity = weight.rarity;
            break;
        }
        roll -= weight.weight;
    }
    content.pick_joker(rarity, rng).map(|def| def.id.clone())
}

fn roll_consumable(
    content: &Content,
    kind: ConsumableKind,
    rng: &mut RngState,
) -> Option<ShopOffer> {
    content.pick_consumable(kind, rng).map(|def| ShopOffer::Consumable {
        id: def.id.clone(),
        kind: def.kind,
        price: def.price,
    })
}
