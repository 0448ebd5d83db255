//! Terminal front end: play tic-tac-toe against a friend and browse the match history.

use std::env;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tictactoe_back::client::{
    MatchController, ResultsApi, ResultsClient, display::history_table,
};

const API_URL_ENV: &str = "TICTACTOE_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:8080";
const HISTORY_ROWS: usize = 10;
const HELP: &str = "commands: 0-8 play a cell, r reset, h reload history, q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(usize),
    Reset,
    History,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "r" | "reset" => Some(Command::Reset),
            "h" | "history" => Some(Command::History),
            "q" | "quit" => Some(Command::Quit),
            other => other.parse().ok().map(Command::Play),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.into());
    let client = ResultsClient::new(&base_url).context("building results client")?;
    let mut controller = MatchController::new(client);

    controller.refresh_history().await;
    render(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        match Command::parse(&line) {
            Some(Command::Play(index)) => {
                controller.play(index);
            }
            Some(Command::Reset) => {
                controller.reset().await;
            }
            Some(Command::History) => {
                controller.refresh_history().await;
            }
            Some(Command::Quit) => break,
            None => {
                println!("{HELP}");
                continue;
            }
        }
        render(&controller);
    }

    Ok(())
}

fn render<A: ResultsApi>(controller: &MatchController<A>) {
    let game = controller.game();
    println!("\n{}\n", game.board());
    println!("{}", game.status_line());
    if game.is_over() {
        println!("type `r` to record the result and start a new game");
    }

    let history = controller.history();
    if !history.is_empty() {
        let shown = &history[..history.len().min(HISTORY_ROWS)];
        println!("\nMatch history\n{}", history_table(shown));
    }
}

/// Logs go to stderr so they do not interleave with the board.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(" 4 "), Some(Command::Play(4)));
        assert_eq!(Command::parse("r"), Some(Command::Reset));
        assert_eq!(Command::parse("history"), Some(Command::History));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("-1"), None);
        assert_eq!(Command::parse("move"), None);
    }

    #[test]
    fn out_of_range_cells_still_parse() {
        // The game itself ignores them.
        assert_eq!(Command::parse("42"), Some(Command::Play(42)));
    }
}
