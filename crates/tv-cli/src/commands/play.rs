use comfy_table::{ContentArrangement, Table};

use tv_engine::{Game, Outcome};
use tv_roster::RosterStore;

use super::{Context, record, render};

pub fn list_games() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Command", "Game", "Chaos pool"]);
    for game in Game::ALL {
        let chaos = if Game::CHAOS_POOL.contains(&game) { "yes" } else { "" };
        table.add_row(vec![game.slug(), game.label(), chaos]);
    }
    println!("{table}");
    Ok(())
}

pub fn run(ctx: &Context, game: &str, person: Option<&str>, json: bool) -> Result<(), String> {
    let game: Game = game.parse().map_err(|e: tv_engine::EngineError| e.to_string())?;
    let mut store = ctx.load_store()?;
    let mut engine = ctx.engine()?;

    let outcome = match (game, person) {
        (Game::AssignTask, Some(name)) => engine.assign_task_to(name, &store),
        (_, Some(_)) => return Err("--person only applies to assign-task".into()),
        (game, None) => engine.play(game, &mut store),
    }
    .map_err(|e| e.to_string())?;

    finish(ctx, &mut store, &outcome, json)
}

pub fn chaos(ctx: &Context, json: bool) -> Result<(), String> {
    let mut store = ctx.load_store()?;
    let mut engine = ctx.engine()?;
    let outcome = engine.chaos(&mut store).map_err(|e| e.to_string())?;
    finish(ctx, &mut store, &outcome, json)
}

/// Print the outcome, record it if it succeeded, and persist the store
/// (role history may have changed either way).
fn finish(ctx: &Context, store: &mut RosterStore, outcome: &Outcome, json: bool) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(outcome).map_err(|e| e.to_string())?;
        println!("{text}");
    } else if outcome.ok {
        println!("{}", render(outcome));
    }

    let recorded = record(store, outcome);
    ctx.save_store(store)?;
    recorded
}
