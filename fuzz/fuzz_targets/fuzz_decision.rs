#![no_main]

//! Decision pass fuzzer.
//!
//! Builds structurally valid boards from fuzzer input so the engine sees
//! far more interesting states than random JSON would produce.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tactician::game::TurnOrder;
use tactician::{
    ActionKind, Diamond, Engine, GridMap, Position, TacticsConfig, Team, TileType, Turn, Unit,
};

/// A fuzzer-generated unit.
#[derive(Arbitrary, Debug, Clone)]
struct FuzzUnit {
    x: u8,
    y: u8,
    spawned: bool,
    summoning: bool,
    holding: Option<u8>,
}

/// A fuzzer-generated board.
#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    tiles: Vec<u8>,
    diamonds: Vec<(u8, u8, u8)>,
    ours: Vec<FuzzUnit>,
    theirs: Vec<FuzzUnit>,
    tick: u8,
    total: u8,
    we_act_first: Option<bool>,
    seed: u64,
    randomize: bool,
}

fn unit(id: String, team: &str, u: &FuzzUnit, width: i32, height: i32) -> Unit {
    let mut unit = Unit::new(id, team);
    if u.spawned {
        unit = unit.spawned_at(Position::new(i32::from(u.x) % width, i32::from(u.y) % height));
    }
    if u.summoning {
        unit = unit.summoning();
    }
    if let Some(d) = u.holding {
        unit = unit.holding(format!("d{}", d % 8));
    }
    unit
}

fuzz_target!(|input: FuzzInput| {
    let width = usize::from(input.width % 16) + 1;
    let height = usize::from(input.height % 16) + 1;
    let Ok(mut map) = GridMap::new(width, height) else {
        return;
    };
    let (w, h) = (map.width(), map.height());
    for (i, byte) in input.tiles.iter().take(width * height).enumerate() {
        let tile = match byte % 6 {
            0 => TileType::Wall,
            1 => TileType::Spawn,
            _ => TileType::Empty,
        };
        let position = map.position_of(i);
        let _ = map.set(position, tile);
    }
    for (i, &(x, y, level)) in input.diamonds.iter().take(8).enumerate() {
        let position = Position::new(i32::from(x) % w, i32::from(y) % h);
        let _ = map.add_diamond(Diamond::new(format!("d{i}"), position, u32::from(level % 6)));
    }

    let mut turn = Turn::new(u32::from(input.tick), u32::from(input.total), "us", map);
    let mut us = Team::new("us", "Us");
    for (i, u) in input.ours.iter().take(8).enumerate() {
        us.units.push(unit(format!("u{i}"), "us", u, w, h));
    }
    let mut them = Team::new("them", "Them");
    for (i, u) in input.theirs.iter().take(8).enumerate() {
        them.units.push(unit(format!("e{i}"), "them", u, w, h));
    }
    turn.teams = vec![us, them];
    if let Some(first) = input.we_act_first {
        let order = if first { ["us", "them"] } else { ["them", "us"] };
        turn.turn_order = TurnOrder::new().with(
            turn.tick + 1,
            order.iter().map(|t| (*t).to_string()).collect(),
        );
    }

    let config = TacticsConfig {
        randomize_ties: input.randomize,
        ..TacticsConfig::default()
    }
    .with_seed(input.seed);
    let actions = Engine::new(config).compute_actions(&turn);

    for action in &actions {
        if let Some(target) = action.target() {
            assert!(turn.map.in_bounds(target), "{action} targets outside the map");
        }
        if let ActionKind::Move(target) | ActionKind::Spawn(target) = action.kind {
            assert!(turn.map.tile(target).is_ok_and(|t| t != TileType::Wall));
        }
    }
});
