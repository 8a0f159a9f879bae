use std::path::Path;

use colored::Colorize;

use tv_roster::RosterAccess;

use super::Context;

pub fn list(ctx: &Context) -> Result<(), String> {
    let store = ctx.load_store()?;
    if store.task_catalog().is_empty() {
        println!("The task catalog is empty. Load one with `tribe set-tasks <file>`.");
        return Ok(());
    }

    let selection = store.task_selection();
    for (i, task) in store.task_catalog().iter().enumerate() {
        let mark = if selection.is_empty() || selection.contains(&i) {
            "[x]".green()
        } else {
            "[ ]".dimmed()
        };
        println!("  {mark} {:>3}. {task}", i + 1);
    }

    let active = store.active_tasks().len();
    let note = if selection.is_empty() {
        " (no selection: all tasks active)"
    } else {
        ""
    };
    println!("\n  {active} of {} tasks active{note}", store.task_catalog().len());
    Ok(())
}

pub fn set(ctx: &Context, file: &Path) -> Result<(), String> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let tasks: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    let mut store = ctx.load_store()?;
    let count = tasks.len();
    store.set_task_catalog(tasks);
    ctx.save_store(&store)?;
    println!("  {} {count} tasks (selection reset)", "Loaded".green().bold());
    Ok(())
}

pub fn select(ctx: &Context, numbers: &[usize], all: bool, none: bool) -> Result<(), String> {
    let mut store = ctx.load_store()?;

    if all {
        store.select_all_tasks();
    } else if none || numbers.is_empty() {
        store.clear_task_selection();
    } else {
        let len = store.task_catalog().len();
        if let Some(&bad) = numbers.iter().find(|&&n| n == 0 || n > len) {
            return Err(format!("there is no task {bad} (catalog has {len} tasks)"));
        }
        let indices: Vec<usize> = numbers.iter().map(|n| n - 1).collect();
        store.select_tasks(&indices).map_err(|e| e.to_string())?;
    }

    ctx.save_store(&store)?;
    println!(
        "  {} {} of {} tasks active",
        "Selected".green().bold(),
        store.active_tasks().len(),
        store.task_catalog().len()
    );
    Ok(())
}
