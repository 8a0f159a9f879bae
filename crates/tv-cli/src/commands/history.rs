use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::Context;

pub fn run(ctx: &Context, clear: bool) -> Result<(), String> {
    let mut store = ctx.load_store()?;

    if clear {
        store.clear_history();
        ctx.save_store(&store)?;
        println!("  {} history", "Cleared".green().bold());
        return Ok(());
    }

    if store.history().is_empty() {
        println!("No results yet. Play a game with `tribe play <game>` or `tribe chaos`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["When", "Game", "Result"]);
    for entry in store.history() {
        let first_line = entry.result.lines().next().unwrap_or("");
        table.add_row(vec![
            entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            entry.game.clone(),
            first_line.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
