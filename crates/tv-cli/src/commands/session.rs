use std::io::{self, BufRead, Write};

use colored::Colorize;

use tv_engine::{Engine, Game};
use tv_roster::RosterStore;

use super::{Context, record, render};

const HELP: &str = "\
Commands:
  chaos            let the selector pick a game for right now
  <game>           play a game by name (see below)
  assign <name>    give <name> a random task
  again            run the last game (or chaos spin) again
  history          show recent results
  help             show this help
  quit             leave the session";

/// Something the session can run, remembered for `again`.
#[derive(Debug, Clone, PartialEq)]
enum Play {
    Game(Game),
    Chaos,
    Assign(String),
}

/// A running session. The engine, and with it the chaos selector's memory
/// of the last pick, lives as long as this does.
pub struct Session<'a> {
    ctx: &'a Context,
    store: RosterStore,
    engine: Engine,
    last: Option<Play>,
}

impl<'a> Session<'a> {
    pub fn new(ctx: &'a Context) -> Result<Self, String> {
        Ok(Self {
            ctx,
            store: ctx.load_store()?,
            engine: ctx.engine()?,
            last: None,
        })
    }

    /// Handle one line of input.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        let (cmd, rest) = match trimmed.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        let play = match cmd.to_lowercase().as_str() {
            "" => return Ok(String::new()),
            "help" | "?" => return Ok(help()),
            "quit" | "q" | "exit" => return Ok("Goodbye!".to_string()),
            "history" => return Ok(self.history()),
            "again" | "rerun" | "r" => self
                .last
                .clone()
                .ok_or("Nothing to run again yet. Play a game first.")?,
            "chaos" => Play::Chaos,
            "assign" if !rest.is_empty() => Play::Assign(rest.to_string()),
            _ => Play::Game(
                trimmed
                    .parse()
                    .map_err(|e: tv_engine::EngineError| format!("{e} (try 'help')"))?,
            ),
        };

        self.last = Some(play.clone());
        self.run(&play)
    }

    fn run(&mut self, play: &Play) -> Result<String, String> {
        let outcome = match play {
            Play::Game(game) => self.engine.play(*game, &mut self.store),
            Play::Chaos => self.engine.chaos(&mut self.store),
            Play::Assign(name) => self.engine.assign_task_to(name, &self.store),
        }
        .map_err(|e| e.to_string())?;

        let recorded = record(&mut self.store, &outcome);
        self.ctx.save_store(&self.store)?;
        recorded.map(|()| render(&outcome))
    }

    fn history(&self) -> String {
        if self.store.history().is_empty() {
            return "No results yet.".to_string();
        }
        self.store
            .history()
            .iter()
            .map(|e| {
                let first = e.result.lines().next().unwrap_or("");
                format!("{}  {}: {first}", e.timestamp.format("%H:%M"), e.game)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn help() -> String {
    let games: Vec<&str> = Game::ALL.iter().map(|g| g.slug()).collect();
    format!("{HELP}\n\nGames: {}", games.join(", "))
}

pub fn run(ctx: &Context) -> Result<(), String> {
    let mut session = Session::new(ctx)?;

    println!("  {} Tribe Vibe session", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.yellow());
            }
        }
    }

    Ok(())
}
