use anyhow::{bail, Result};
use hustle_core::{
    Content, Event, EventBus, GameConfig, RunState, Section, Stage,
};
use std::io::{self, BufRead, Write};

const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone, Copy)]
struct CliOptions {
    auto: bool,
    seed: u64,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut auto = false;
    let mut seed = DEFAULT_RUN_SEED;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => auto = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(parsed) = value.parse::<u64>() {
                        seed = parsed;
                    }
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions { auto, seed }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let run = RunState::new(GameConfig::standard(), Content::builtin(), options.seed);
    if options.auto {
        run_auto(run)
    } else {
        run_loop(run)
    }
}

fn run_loop(mut run: RunState) -> Result<()> {
    let mut events = EventBus::default();
    println!("seed: {}", run.rng.seed());
    print_help();
    print_state(&run);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();
        let outcome = match cmd {
            "help" | "h" | "?" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" | "q" => break,
            "state" | "s" => {
                print_state(&run);
                Ok(())
            }
            "hand" => {
                print_section(&run, Section::Hand, "hand");
                Ok(())
            }
            "jokers" | "j" => {
                print_section(&run, Section::Jokers, "jokers");
                Ok(())
            }
            "cons" | "c" => {
                print_section(&run, Section::Consumables, "consumables");
                Ok(())
            }
            "shop" => {
                print_section(&run, Section::Shop, "shop");
                Ok(())
            }
            "pack" => {
                print_section(&run, Section::Pack, "pack");
                Ok(())
            }
            "select" => parse_indices(&args).and_then(|indices| {
                for idx in indices {
                    run.select_card(idx)?;
                }
                let preview = run.selected_hand();
                println!(
                    "selected {:?} -> {} ({} x {:.2})",
                    run.selected,
                    preview.total.total(),
                    preview.total.chips,
                    preview.total.mult
                );
                Ok(())
            }),
            "unselect" | "u" => parse_indices(&args).and_then(|indices| {
                for idx in indices {
                    run.deselect_card(idx)?;
                }
                Ok(())
            }),
            "play" | "p" => run.play_hand(&mut events).map(|breakdown| {
                println!(
                    "{}: {} chips x {:.2} mult = {}",
                    breakdown.hand.name(),
                    breakdown.total.chips,
                    breakdown.total.mult,
                    breakdown.total.total()
                );
            }),
            "discard" | "x" => run.discard_hand(&mut events),
            "use" => parse_index(&args).and_then(|idx| run.use_consumable(idx, &mut events)),
            "buy" | "b" => parse_index(&args).and_then(|idx| run.buy_item(idx, &mut events)),
            "pick" => parse_index(&args).and_then(|idx| run.pick_pack_option(idx, &mut events)),
            "skip" => run.skip_pack(),
            "sell" => parse_index(&args).and_then(|idx| run.sell_joker(idx, &mut events)),
            "move" | "m" => parse_move(&args).and_then(|(section, from, to)| {
                run.move_item(section, from, to)
            }),
            "next" | "n" => run.exit_shop(&mut events),
            _ => {
                println!("unknown command '{cmd}' (try 'help')");
                Ok(())
            }
        };
        if let Err(err) = outcome {
            println!("error: {err}");
        }
        drain_events(&mut events);
        if run.state.stage == Stage::GameOver {
            println!("run over at ante {}", run.state.ante);
            break;
        }
        if run.state.stage == Stage::CashOut {
            println!("run won with ${}", run.state.money);
            break;
        }
    }
    Ok(())
}

/// Scripted demo: greedily play the first five cards each hand until the
/// run ends, buying nothing.
fn run_auto(mut run: RunState) -> Result<()> {
    let mut events = EventBus::default();
    println!("seed: {}", run.rng.seed());
    loop {
        match run.state.stage {
            Stage::Playing => {
                let count = run.hand.len().min(5);
                if count == 0 {
                    bail!("empty hand while playing");
                }
                for idx in 0..count {
                    run.select_card(idx)?;
                }
                let breakdown = run.play_hand(&mut events)?;
                println!(
                    "played {}: {} (blind {} / {})",
                    breakdown.hand.name(),
                    breakdown.total.total(),
                    run.state.blind_score,
                    run.state.target
                );
            }
            Stage::Shop => {
                run.exit_shop(&mut events)?;
            }
            Stage::PackOpening => {
                run.skip_pack()?;
            }
            Stage::GameOver => {
                println!("run over at ante {}", run.state.ante);
                break;
            }
            Stage::CashOut => {
                println!("run won with ${}", run.state.money);
                break;
            }
        }
        drain_events(&mut events);
    }
    Ok(())
}

fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::BlindStarted {
                ante,
                blind,
                target,
                hands,
                discards,
            } => println!(
                "== ante {ante} {} blind: target {target}, {hands} hands, {discards} discards",
                blind.name()
            ),
            Event::HandPlayed {
                hand,
                chips,
                mult,
                total,
            } => println!("scored {}: {chips} x {mult:.2} = {total}", hand.name()),
            Event::Discarded { count } => println!("discarded {count} cards"),
            Event::BlindCleared {
                score,
                reward,
                money,
            } => println!("blind cleared at {score}, +${reward} (now ${money})"),
            Event::BlindFailed { score } => println!("blind failed at {score}"),
            Event::ItemBought { name, price, money } => {
                println!("bought {name} for ${price} (now ${money})")
            }
            Event::PackOpened { options } => println!("pack opened: {options} options"),
            Event::PackChosen { name } => println!("took {name}"),
            Event::JokerSold { id, value, money } => {
                println!("sold {id} for ${value} (now ${money})")
            }
            Event::ConsumableUsed { kind, id } => println!("used {} {id}", kind.name()),
            Event::RunWon { ante, money } => println!("run won at ante {ante} with ${money}"),
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  state | hand | jokers | cons | shop | pack   show things");
    println!("  select <idx..>    select hand cards (order matters)");
    println!("  unselect <idx..>  clear selections");
    println!("  play | discard    act on the selection");
    println!("  use <idx>         use a consumable on the selection");
    println!("  buy <idx>         buy a shop offer");
    println!("  pick <idx> | skip pack choices");
    println!("  sell <idx>        sell a joker");
    println!("  move <hand|jokers|cons> <from> <to>");
    println!("  next              leave the shop for the next blind");
    println!("  quit");
}

fn print_state(run: &RunState) {
    let state = &run.state;
    println!(
        "ante {} / {} blind ({}), round {}",
        state.ante,
        state.blind.name(),
        state.stage.name(),
        state.round
    );
    println!(
        "score {} / {}, hands {}, discards {}, ${}",
        state.blind_score, state.target, state.hands_left, state.discards_left, state.money
    );
    println!("deck: {} to draw", run.deck.draw.len());
}

fn print_section(run: &RunState, section: Section, label: &str) {
    let len = run.section_len(section);
    if len == 0 {
        println!("{label}: empty");
        return;
    }
    for idx in 0..len {
        if let Some(info) = run.item_info(section, idx) {
            let marker = if section == Section::Hand && run.selected.contains(&idx) {
                "*"
            } else {
                " "
            };
            if info.price > 0 {
                println!("{marker}{idx:>2}. {} (${}) - {}", info.name, info.price, info.description);
            } else {
                println!("{marker}{idx:>2}. {} - {}", info.name, info.description);
            }
        }
    }
}

fn parse_indices(args: &[&str]) -> Result<Vec<usize>, hustle_core::RunError> {
    let mut indices = Vec::new();
    for arg in args {
        match arg.parse::<usize>() {
            Ok(value) => indices.push(value),
            Err(_) => return Err(hustle_core::RunError::InvalidCardIndex),
        }
    }
    Ok(indices)
}

fn parse_index(args: &[&str]) -> Result<usize, hustle_core::RunError> {
    args.first()
        .and_then(|arg| arg.parse::<usize>().ok())
        .ok_or(hustle_core::RunError::InvalidItemIndex)
}

fn parse_move(args: &[&str]) -> Result<(Section, usize, usize), hustle_core::RunError> {
    let section = match args.first().copied() {
        Some("hand") => Section::Hand,
        Some("jokers") => Section::Jokers,
        Some("cons") => Section::Consumables,
        _ => return Err(hustle_core::RunError::ImmovableSection),
    };
    let from = args
        .get(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .ok_or(hustle_core::RunError::InvalidItemIndex)?;
    let to = args
        .get(2)
        .and_then(|arg| arg.parse::<usize>().ok())
        .ok_or(hustle_core::RunError::InvalidItemIndex)?;
    Ok((section, from, to))
}
