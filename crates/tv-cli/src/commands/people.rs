use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tv_engine::{Birthdate, todays_birthdays};
use tv_roster::RosterAccess;

use super::Context;

pub fn list(ctx: &Context) -> Result<(), String> {
    let store = ctx.load_store()?;
    if store.people().is_empty() {
        println!("No one on the roster yet. Add people with `tribe add <name>...`.");
        return Ok(());
    }

    let today = todays_birthdays(&store, store.now().date());
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Birthday", ""]);

    for name in store.people() {
        let birthday = store.birthdate(name).unwrap_or("");
        let marker = if today.contains(name) { "🎂 today" } else { "" };
        table.add_row(vec![name.as_str(), birthday, marker]);
    }

    println!("{table}");
    println!("\n  {} people", store.people().len());
    Ok(())
}

pub fn add(ctx: &Context, names: &[String], birthday: Option<&str>) -> Result<(), String> {
    if birthday.is_some() && names.len() != 1 {
        return Err("--birthday needs exactly one name".into());
    }
    if let Some(date) = birthday {
        check_date(date)?;
    }

    let mut store = ctx.load_store()?;
    let added = store.add_people(names);

    if let Some(date) = birthday {
        let name = names[0].trim();
        store.set_birthdate(name, date).map_err(|e| e.to_string())?;
    }

    ctx.save_store(&store)?;
    println!(
        "  {} {added} of {} (roster now has {})",
        "Added".green().bold(),
        names.len(),
        store.people().len()
    );
    Ok(())
}

pub fn remove(ctx: &Context, name: &str) -> Result<(), String> {
    let mut store = ctx.load_store()?;
    if !store.remove_person(name) {
        return Err(format!("{name} is not on the roster"));
    }
    ctx.save_store(&store)?;
    println!("  {} {name}", "Removed".green().bold());
    Ok(())
}

pub fn clear(ctx: &Context) -> Result<(), String> {
    let mut store = ctx.load_store()?;
    store.clear_people();
    ctx.save_store(&store)?;
    println!("  {} the roster", "Cleared".green().bold());
    Ok(())
}

pub fn birthday(ctx: &Context, name: &str, date: &str) -> Result<(), String> {
    check_date(date)?;
    let mut store = ctx.load_store()?;
    store.set_birthdate(name, date).map_err(|e| e.to_string())?;
    ctx.save_store(&store)?;
    println!("  {} birthday for {name}: {date}", "Saved".green().bold());
    Ok(())
}

fn check_date(date: &str) -> Result<(), String> {
    match Birthdate::parse(date) {
        Some(_) => Ok(()),
        None => Err(format!("'{date}' is not a date: use YYYY-MM-DD or DD-MM")),
    }
}
