//! Console driver: rolls two fighters, runs a short skirmish, then walks
//! the inventory, grid, timeline, and roster demos, printing each outcome.

use std::error::Error;
use std::io::{self, Write};

use skirmish::combat::{attack, defend, AttackOutcome, Character, Class};
use skirmish::core::constants::{GRID_COLS, GRID_ROWS};
use skirmish::grid::Grid;
use skirmish::items::{Inventory, InventoryError, Item, ItemKind, UseOutcome};
use skirmish::roster::Role;
use skirmish::timeline::{GameEvent, Timeline};

fn prompt_name(prompt: &str, fallback: &str) -> io::Result<String> {
    print!("{prompt} [{fallback}]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    Ok(if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    })
}

fn print_attack(outcome: &AttackOutcome, defender: &Character) {
    match outcome {
        AttackOutcome::Hit { damage, critical } => {
            println!("Successful attack");
            if *critical {
                println!("Damage: {damage} (critical)");
            } else {
                println!("Damage: {damage}");
            }
        }
        AttackOutcome::Parried { .. } => println!("{}", defend(defender)),
    }
    println!("{} life: {}%", defender.name, defender.health);
}

fn run_skirmish(timeline: &mut Timeline<i64>, started_at: i64) -> io::Result<()> {
    let mut rng = rand::thread_rng();

    let name_a = prompt_name("First fighter name", "Igor")?;
    let name_b = prompt_name("Second fighter name", "Thomas")?;

    let attacker = Character::roll(name_a, Class::Warrior, &mut rng);
    let mut defender = Character::roll(name_b, Class::Warrior, &mut rng);
    println!("{} enters with strength {}", attacker.name, attacker.strength);
    println!("{} enters with strength {}", defender.name, defender.strength);

    for round in 1..=2 {
        let outcome = attack(&attacker, &mut defender, &mut rng);
        print_attack(&outcome, &defender);
        timeline.add(GameEvent::new(format!("round {round} resolved"), started_at));
    }
    Ok(())
}

fn run_inventory_demo() {
    let potion = Item::new(ItemKind::Potion);
    let weapon = Item::new(ItemKind::Weapon);
    let stray = Item::new(ItemKind::Armor);
    let potion_id = potion.id.clone();

    let mut inventory = Inventory::new();
    inventory.add(potion);
    inventory.add(weapon);
    println!("Inventory size: {}", inventory.len());

    match inventory.use_item(&potion_id) {
        Ok(UseOutcome::Consumed) => println!("potion has been used"),
        Ok(UseOutcome::Worn { remaining }) => println!("item used, usage remaining: {remaining}"),
        Ok(UseOutcome::Broken) => println!("that item is spent"),
        Err(err) => println!("{err}"),
    }

    inventory.remove(&potion_id);
    println!("Inventory size: {}", inventory.len());

    // The stray armor was never added; using it is the signaled failure.
    match inventory.use_item(&stray.id) {
        Err(InventoryError::ItemNotFound { id }) => println!("cannot use item {id}"),
        Ok(outcome) => println!("unexpected use outcome: {outcome:?}"),
    }
}

fn run_grid_demo(occupant: &str) -> Result<(), Box<dyn Error>> {
    let mut grid: Grid<String> = Grid::new(GRID_ROWS, GRID_COLS)?;
    grid.place(2, 3, occupant.to_string())?;
    if let Some(name) = grid.get(2, 3)? {
        println!("Entity at (2, 3): {name}");
    }
    if let Err(err) = grid.get(GRID_ROWS, 0) {
        println!("{err}");
    }
    Ok(())
}

fn run_roster_demo() {
    for role in Role::all() {
        match role.activity() {
            Some(line) => println!("{}: {line}", role.category()),
            None => println!("{}", role.category()),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let started_at = chrono::Utc::now().timestamp();
    let mut timeline: Timeline<i64> = Timeline::new();

    run_skirmish(&mut timeline, started_at)?;
    run_inventory_demo();
    run_grid_demo("Thomas")?;

    timeline.add(GameEvent::new("skirmish ended", started_at + 1));
    let opening = timeline.events_at(started_at);
    println!("Events at t={started_at}: {}", opening.len());
    for event in opening {
        println!("  [{}] {}", event.id, event.action);
    }

    run_roster_demo();
    Ok(())
}
