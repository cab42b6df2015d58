#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod input;
mod tui;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use clap::{Command, arg};
use grid_chess::game::{Game, MoveResult};
use grid_chess::rules::ChessRules;
use log::info;

use crate::input::parse_command;


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Grid chess")
        .version(clap::crate_version!())
        .about("Two players sharing a terminal. Enter turns as \"x1,y1 x2,y2\", or \"quit\".")
        .arg(arg!(--"rules" <file> "Path to yaml-serialized ChessRules").required(false))
        .arg(arg!(--"json" "Print the board state as JSON after each turn"))
        .get_matches();

    let rules = match matches.get_one::<String>("rules") {
        Some(path) => read_rules_file(Path::new(path))?,
        None => ChessRules::classic(),
    };
    rules.verify().map_err(anyhow::Error::msg).context("Invalid rules")?;
    run(Game::new(rules), matches.get_flag("json"))
}

fn read_rules_file(path: &Path) -> anyhow::Result<ChessRules> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Reading rules file {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Parsing rules file {}", path.display()))
}

fn print_result(result: &MoveResult) {
    println!("{}", result.message);
    if let Some(captured) = result.captured_piece {
        println!("Captured {} {}", captured.force, captured.kind);
    }
}

fn run(mut game: Game, json: bool) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", tui::render_game(&game));
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let (start, end) = match parse_command(&line) {
            Ok(input::Command::Turn { start, end }) => (start, end),
            Ok(input::Command::Quit) => return Ok(()),
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };
        let result = game.play_turn(start, end);
        print_result(&result);
        if !result.success {
            continue;
        }
        print!("{}", tui::render_game(&game));
        if json {
            println!("{}", serde_json::to_string(&game.get_board_state())?);
        }
        if let Some(winner) = result.winner {
            info!("Game over, {} won", winner);
            return Ok(());
        }
    }
}
