use hustle_core::{
    BlindKind, Card, Content, Event, EventBus, GameConfig, JokerRarity, Rank, RunError, RunState,
    Section, ShopOffer, ShopState, Stage, Suit,
};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::standard(suit, rank)
}

fn new_run(seed: u64) -> RunState {
    RunState::new(GameConfig::standard(), Content::builtin(), seed)
}

/// Replace the dealt hand with a fixed one and select the first `take`.
fn stage_hand(run: &mut RunState, cards: Vec<Card>, take: usize) {
    run.selected.clear();
    run.hand = cards;
    for idx in 0..take {
        run.select_card(idx).unwrap();
    }
}

fn quad_fives() -> Vec<Card> {
    vec![
        card(Suit::Spades, Rank::Five),
        card(Suit::Hearts, Rank::Five),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Spades, Rank::Two),
    ]
}

#[test]
fn opening_deal() {
    let run = new_run(1);
    assert_eq!(run.state.stage, Stage::Playing);
    assert_eq!(run.state.ante, 1);
    assert_eq!(run.state.blind, BlindKind::Small);
    assert_eq!(run.state.target, 300);
    assert_eq!(run.state.money, 4);
    assert_eq!(run.state.hands_left, 4);
    assert_eq!(run.state.discards_left, 2);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.deck.draw.len(), 44);
    assert_eq!(run.deck.template.len(), 52);
}

#[test]
fn sixth_selection_is_rejected() {
    let mut run = new_run(1);
    for idx in 0..5 {
        run.select_card(idx).unwrap();
    }
    assert!(matches!(run.select_card(5), Err(RunError::SelectionFull)));
    assert_eq!(run.selected.len(), 5);
}

#[test]
fn reselecting_is_a_no_op() {
    let mut run = new_run(1);
    run.select_card(0).unwrap();
    run.select_card(0).unwrap();
    assert_eq!(run.selected, vec![0]);
}

#[test]
fn discard_refills_the_hand() {
    let mut run = new_run(1);
    for idx in 0..3 {
        run.select_card(idx).unwrap();
    }
    let mut events = EventBus::default();
    run.discard_hand(&mut events).unwrap();
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.deck.draw.len(), 41);
    assert_eq!(run.state.discards_left, 1);
    assert!(run.selected.is_empty());
    assert!(events.drain().any(|event| event == Event::Discarded { count: 3 }));
}

#[test]
fn discard_needs_a_selection() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    assert!(matches!(
        run.discard_hand(&mut events),
        Err(RunError::EmptySelection)
    ));
}

#[test]
fn quads_clear_the_small_blind() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    stage_hand(&mut run, quad_fives(), 4);
    let breakdown = run.play_hand(&mut events).unwrap();
    assert_eq!(breakdown.total.total(), 560);
    assert_eq!(run.state.blind_score, 560);
    assert_eq!(run.state.stage, Stage::Shop);
    assert!(run.shop.is_some());
    // Reward: 3 blind base + 3 unused hands + no interest on $4.
    assert_eq!(run.state.money, 10);
    let drained: Vec<Event> = events.drain().collect();
    assert!(drained.iter().any(|event| matches!(
        event,
        Event::BlindCleared {
            score: 560,
            reward: 6,
            money: 10,
        }
    )));
}

#[test]
fn interest_pays_per_five_held() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.state.money = 13;
    stage_hand(&mut run, quad_fives(), 4);
    run.play_hand(&mut events).unwrap();
    // 3 + 3 + floor(13 / 5) = 8.
    assert_eq!(run.state.money, 21);
}

#[test]
fn failing_the_last_hand_ends_the_run() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.state.hands_left = 1;
    stage_hand(&mut run, vec![card(Suit::Clubs, Rank::Two)], 1);
    let breakdown = run.play_hand(&mut events).unwrap();
    assert_eq!(breakdown.total.total(), 7);
    assert_eq!(run.state.stage, Stage::GameOver);
    assert!(events
        .drain()
        .any(|event| matches!(event, Event::BlindFailed { score: 7 })));
}

#[test]
fn play_with_no_hands_left_is_rejected() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.select_card(0).unwrap();
    run.state.hands_left = 0;
    assert!(matches!(
        run.play_hand(&mut events),
        Err(RunError::NoHandsLeft)
    ));
    assert_eq!(run.state.blind_score, 0);
    assert_eq!(run.hand.len(), 8);
}

#[test]
fn play_needs_a_selection() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    assert!(matches!(
        run.play_hand(&mut events),
        Err(RunError::EmptySelection)
    ));
}

#[test]
fn leaving_the_shop_starts_the_big_blind() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    stage_hand(&mut run, quad_fives(), 4);
    run.play_hand(&mut events).unwrap();
    run.exit_shop(&mut events).unwrap();
    assert_eq!(run.state.ante, 1);
    assert_eq!(run.state.blind, BlindKind::Big);
    assert_eq!(run.state.stage, Stage::Playing);
    assert_eq!(run.state.target, 450);
    assert_eq!(run.state.blind_score, 0);
    assert_eq!(run.state.round, 1);
    assert_eq!(run.hand.len(), 8);
    assert_eq!(run.deck.draw.len() + run.hand.len(), 52);
}

#[test]
fn boss_clear_rolls_the_ante() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.state.blind = BlindKind::Boss;
    run.state.stage = Stage::Shop;
    run.exit_shop(&mut events).unwrap();
    assert_eq!(run.state.ante, 2);
    assert_eq!(run.state.blind, BlindKind::Small);
    assert_eq!(run.state.target, 800);
}

#[test]
fn clearing_the_final_boss_wins_the_run() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.state.ante = 8;
    run.state.blind = BlindKind::Boss;
    run.state.stage = Stage::Shop;
    run.exit_shop(&mut events).unwrap();
    assert_eq!(run.state.stage, Stage::CashOut);
    assert!(events
        .drain()
        .any(|event| matches!(event, Event::RunWon { ante: 8, .. })));
}

#[test]
fn gapped_ante_table_leaves_the_round_untouched() {
    let mut config = GameConfig::standard();
    config.antes.retain(|rule| rule.ante != 2);
    let mut run = RunState::new(config, Content::builtin(), 1);
    let mut events = EventBus::default();
    run.state.blind = BlindKind::Boss;
    run.state.stage = Stage::Shop;
    assert!(matches!(
        run.exit_shop(&mut events),
        Err(RunError::MissingAnteRule(2))
    ));
    assert_eq!(run.state.round, 0);
    assert_eq!(run.state.ante, 1);
    assert_eq!(run.state.blind, BlindKind::Boss);
    assert_eq!(run.state.stage, Stage::Shop);
}

#[test]
fn exit_shop_outside_the_shop_is_rejected() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    assert!(matches!(
        run.exit_shop(&mut events),
        Err(RunError::InvalidStage(Stage::Playing))
    ));
}

#[test]
fn buying_needs_money() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.state.stage = Stage::Shop;
    run.shop = Some(ShopState {
        offers: vec![ShopOffer::Pack { price: 4 }],
    });
    run.state.money = 3;
    assert!(matches!(
        run.buy_item(0, &mut events),
        Err(RunError::NotEnoughMoney)
    ));
    assert_eq!(run.state.money, 3);
}

#[test]
fn pack_purchase_opens_a_choice() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.state.stage = Stage::Shop;
    run.shop = Some(ShopState {
        offers: vec![ShopOffer::Pack { price: 4 }],
    });
    run.buy_item(0, &mut events).unwrap();
    assert_eq!(run.state.money, 0);
    assert_eq!(run.state.stage, Stage::PackOpening);
    let options = run.open_pack.as_ref().map(|pack| pack.options.len());
    assert_eq!(options, Some(3));

    run.pick_pack_option(0, &mut events).unwrap();
    assert_eq!(run.state.stage, Stage::Shop);
    assert!(run.open_pack.is_none());
    let owned = run.inventory.jokers.len() + run.inventory.consumables.len();
    assert_eq!(owned, 1);
}

#[test]
fn skipping_a_pack_returns_to_the_shop() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.state.stage = Stage::Shop;
    run.shop = Some(ShopState {
        offers: vec![ShopOffer::Pack { price: 4 }],
    });
    run.buy_item(0, &mut events).unwrap();
    run.skip_pack().unwrap();
    assert_eq!(run.state.stage, Stage::Shop);
    assert!(run.open_pack.is_none());
    assert_eq!(run.inventory.jokers.len() + run.inventory.consumables.len(), 0);
}

#[test]
fn buying_a_playing_card_grows_the_template() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.state.stage = Stage::Shop;
    run.shop = Some(ShopState {
        offers: vec![ShopOffer::PlayingCard {
            card: card(Suit::Hearts, Rank::Ace),
            price: 1,
        }],
    });
    run.buy_item(0, &mut events).unwrap();
    assert_eq!(run.deck.template.len(), 53);
    // A fresh id, not the placeholder.
    assert!(run.deck.template.last().map(|c| c.id).unwrap_or(0) > 52);
}

#[test]
fn selling_a_joker_refunds_half() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.inventory
        .add_joker("joker".to_string(), JokerRarity::Common, 4)
        .unwrap();
    run.sell_joker(0, &mut events).unwrap();
    assert!(run.inventory.jokers.is_empty());
    assert_eq!(run.state.money, 6);
}

#[test]
fn jokers_cannot_be_sold_after_the_run_ends() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.inventory
        .add_joker("joker".to_string(), JokerRarity::Common, 4)
        .unwrap();
    run.state.stage = Stage::GameOver;
    assert!(matches!(
        run.sell_joker(0, &mut events),
        Err(RunError::InvalidStage(Stage::GameOver))
    ));
    assert_eq!(run.inventory.jokers.len(), 1);
    assert_eq!(run.state.money, 4);
}

#[test]
fn strength_demands_exactly_two_targets() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.inventory
        .add_consumable("strength".to_string(), hustle_core::ConsumableKind::Tarot)
        .unwrap();
    run.select_card(0).unwrap();
    assert!(matches!(
        run.use_consumable(0, &mut events),
        Err(RunError::InvalidTargetCount)
    ));

    run.select_card(1).unwrap();
    let before: Vec<Rank> = vec![run.hand[0].rank, run.hand[1].rank];
    run.use_consumable(0, &mut events).unwrap();
    assert_eq!(run.hand[0].rank, before[0].next());
    assert_eq!(run.hand[1].rank, before[1].next());
    assert!(run.selected.is_empty());
    assert!(run.inventory.consumables.is_empty());
    // The template copy moved with the hand card.
    let id = run.hand[0].id;
    let in_template = run.deck.template.iter().find(|c| c.id == id).copied();
    assert_eq!(in_template.map(|c| c.rank), Some(before[0].next()));
}

#[test]
fn cryptid_copy_joins_hand_and_template() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.inventory
        .add_consumable("cryptid".to_string(), hustle_core::ConsumableKind::Spectral)
        .unwrap();
    run.select_card(0).unwrap();
    let original = run.hand[0];
    run.use_consumable(0, &mut events).unwrap();
    assert_eq!(run.hand.len(), 9);
    assert_eq!(run.deck.template.len(), 53);
    let copy = run.hand[8];
    assert_eq!((copy.suit, copy.rank), (original.suit, original.rank));
    assert_ne!(copy.id, original.id);
}

#[test]
fn immolate_burns_cards_out_of_the_deck() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.inventory
        .add_consumable("immolate".to_string(), hustle_core::ConsumableKind::Spectral)
        .unwrap();
    run.select_card(0).unwrap();
    run.select_card(1).unwrap();
    run.use_consumable(0, &mut events).unwrap();
    assert_eq!(run.hand.len(), 6);
    assert_eq!(run.deck.template.len(), 50);
}

#[test]
fn context_free_consumables_demand_an_empty_selection() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.inventory
        .add_consumable("the_empress".to_string(), hustle_core::ConsumableKind::Tarot)
        .unwrap();
    run.select_card(0).unwrap();
    run.select_card(1).unwrap();
    let money = run.state.money;
    assert!(matches!(
        run.use_consumable(0, &mut events),
        Err(RunError::InvalidTargetCount)
    ));
    // A rejected use keeps the selection and the consumable.
    assert_eq!(run.selected, vec![0, 1]);
    assert_eq!(run.inventory.consumables.len(), 1);
    assert_eq!(run.state.money, money);

    run.deselect_card(0).unwrap();
    run.deselect_card(1).unwrap();
    run.use_consumable(0, &mut events).unwrap();
    assert_eq!(run.state.money, money + 5);
}

#[test]
fn consumables_are_locked_after_the_run_ends() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.inventory
        .add_consumable("the_empress".to_string(), hustle_core::ConsumableKind::Tarot)
        .unwrap();
    run.state.stage = Stage::GameOver;
    assert!(matches!(
        run.use_consumable(0, &mut events),
        Err(RunError::InvalidStage(Stage::GameOver))
    ));
}

#[test]
fn hermit_doubles_up_to_the_cap() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    run.inventory
        .add_consumable("the_hermit".to_string(), hustle_core::ConsumableKind::Tarot)
        .unwrap();
    run.state.money = 30;
    run.use_consumable(0, &mut events).unwrap();
    assert_eq!(run.state.money, 50);
}

#[test]
fn moving_a_hand_card_remaps_the_selection() {
    let mut run = new_run(1);
    run.select_card(0).unwrap();
    let moved = run.hand[0];
    run.move_item(Section::Hand, 0, 2).unwrap();
    assert_eq!(run.hand[2], moved);
    assert_eq!(run.selected, vec![2]);
}

#[test]
fn moving_a_joker_changes_activation_order() {
    let mut run = new_run(1);
    run.inventory
        .add_joker("joker".to_string(), JokerRarity::Common, 2)
        .unwrap();
    run.inventory
        .add_joker("sly_joker".to_string(), JokerRarity::Common, 3)
        .unwrap();
    run.move_item(Section::Jokers, 1, 0).unwrap();
    assert_eq!(run.inventory.jokers[0].id, "sly_joker");
    assert_eq!(run.inventory.jokers[1].id, "joker");
}

#[test]
fn shop_offers_cannot_be_reordered() {
    let mut run = new_run(1);
    let mut events = EventBus::default();
    stage_hand(&mut run, quad_fives(), 4);
    run.play_hand(&mut events).unwrap();
    let offers = run.section_len(Section::Shop);
    assert!(offers >= 2);
    assert!(matches!(
        run.move_item(Section::Shop, 0, 1),
        Err(RunError::ImmovableSection)
    ));
}

#[test]
fn joker_slots_are_bounded() {
    let mut run = new_run(1);
    for idx in 0..5 {
        run.inventory
            .add_joker(format!("j{idx}"), JokerRarity::Common, 1)
            .unwrap();
    }
    assert!(run
        .inventory
        .add_joker("overflow".to_string(), JokerRarity::Common, 1)
        .is_err());
    assert_eq!(run.inventory.jokers.len(), 5);
}

#[test]
fn item_info_reads_every_section() {
    let mut run = new_run(1);
    run.inventory
        .add_joker("joker".to_string(), JokerRarity::Common, 2)
        .unwrap();
    run.inventory
        .add_consumable("the_hermit".to_string(), hustle_core::ConsumableKind::Tarot)
        .unwrap();
    assert!(run.item_info(Section::Hand, 0).is_some());
    assert_eq!(
        run.item_info(Section::Jokers, 0).map(|info| info.name),
        Some("Joker".to_string())
    );
    assert_eq!(
        run.item_info(Section::Consumables, 0).map(|info| info.name),
        Some("The Hermit".to_string())
    );
    assert!(run.item_info(Section::Shop, 0).is_none());
    assert!(run.item_info(Section::Hand, 99).is_none());
}

#[test]
fn same_seed_same_run() {
    let a = new_run(42);
    let b = new_run(42);
    assert_eq!(a.hand, b.hand);
    assert_eq!(a.deck.draw, b.deck.draw);
}
