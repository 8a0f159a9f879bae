//! CLI frontend for the Tribe Vibe group game picker.

mod commands;

use std::path::PathBuf;
use std::process;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use commands::Context;

#[derive(Parser)]
#[command(
    name = "tribe",
    about = "Tribe Vibe: icebreakers, pairings, and chaos for small groups",
    version,
    propagate_version = true
)]
struct Cli {
    /// Store file holding the roster, tasks, and history
    #[arg(long, global = true, default_value = "tribe-vibe.json")]
    data: PathBuf,

    /// RNG seed for reproducible results
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pretend it is this moment (e.g. 2024-03-15T14:30)
    #[arg(long, global = true, value_parser = parse_at)]
    at: Option<NaiveDateTime>,

    /// JSON file overriding the built-in prompt catalogs
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List everyone on the roster
    People,

    /// Add one or more people
    Add {
        /// Names to add
        #[arg(required = true)]
        names: Vec<String>,

        /// Birthdate for the person (YYYY-MM-DD or DD-MM); needs a single name
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Remove a person (and their birthdate)
    Remove {
        /// Name to remove
        name: String,
    },

    /// Remove everyone
    ClearPeople,

    /// Set someone's birthdate
    Birthday {
        /// Person on the roster
        name: String,

        /// YYYY-MM-DD or DD-MM
        date: String,
    },

    /// List the task catalog and which tasks are active
    Tasks,

    /// Replace the task catalog with the lines of a file
    SetTasks {
        /// Text file, one task per line
        file: PathBuf,
    },

    /// Choose which tasks are active
    Select {
        /// Task numbers as shown by `tasks`
        indices: Vec<usize>,

        /// Select every task
        #[arg(long, conflicts_with_all = ["indices", "none"])]
        all: bool,

        /// Clear the selection (all tasks active)
        #[arg(long, conflicts_with = "indices")]
        none: bool,
    },

    /// List the available games
    Games,

    /// Play a game
    Play {
        /// Game to play (see `games`)
        game: String,

        /// For assign-task: give the task to this person
        #[arg(short, long)]
        person: Option<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the chaos selector pick a game for right now
    Chaos {
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent results
    History {
        /// Forget all recent results
        #[arg(long)]
        clear: bool,
    },

    /// Interactive session: play repeatedly without repeating chaos picks
    Session,
}

fn parse_at(s: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM[:SS], got {s:?}"))
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let ctx = Context {
        data: cli.data,
        seed: cli.seed,
        at: cli.at,
        catalog: cli.catalog,
    };

    let result = match cli.command {
        Commands::People => commands::people::list(&ctx),
        Commands::Add { names, birthday } => {
            commands::people::add(&ctx, &names, birthday.as_deref())
        }
        Commands::Remove { name } => commands::people::remove(&ctx, &name),
        Commands::ClearPeople => commands::people::clear(&ctx),
        Commands::Birthday { name, date } => commands::people::birthday(&ctx, &name, &date),
        Commands::Tasks => commands::tasks::list(&ctx),
        Commands::SetTasks { file } => commands::tasks::set(&ctx, &file),
        Commands::Select { indices, all, none } => {
            commands::tasks::select(&ctx, &indices, all, none)
        }
        Commands::Games => commands::play::list_games(),
        Commands::Play { game, person, json } => {
            commands::play::run(&ctx, &game, person.as_deref(), json)
        }
        Commands::Chaos { json } => commands::play::chaos(&ctx, json),
        Commands::History { clear } => commands::history::run(&ctx, clear),
        Commands::Session => commands::session::run(&ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
