use anyhow::*;
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::App;
use crate::commands::*;
use crate::output::QuizOutput;
use crate::storage::QuizStore;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayCommand {
    Answer(usize),
    Next,
    Previous,
    Restart,
    Open,
    Home,
    Status,
}

impl FromStr for PlayCommand {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim().to_lowercase();
        if let std::result::Result::Ok(number) = line.parse::<usize>() {
            return Ok(PlayCommand::Answer(number));
        }
        Ok(match line.as_str() {
            "n" | "next" => PlayCommand::Next,
            "p" | "prev" | "previous" => PlayCommand::Previous,
            "r" | "restart" => PlayCommand::Restart,
            "o" | "open" => PlayCommand::Open,
            "h" | "home" => PlayCommand::Home,
            "s" | "status" => PlayCommand::Status,
            _ => bail!("Unknown command {:?}", line),
        })
    }
}

pub async fn execute<S, O>(app: &mut App<S, O>, command: PlayCommand) -> Result<()>
where
    S: QuizStore + Clone,
    O: QuizOutput + Clone,
{
    match command {
        PlayCommand::Answer(number) => app.select_answer(number),
        PlayCommand::Next => app.next().await,
        PlayCommand::Previous => app.previous().await,
        PlayCommand::Restart => app.restart(),
        PlayCommand::Open => app.open_quiz().await,
        PlayCommand::Home => {
            app.go_home();
            Ok(())
        }
        PlayCommand::Status => app.status(),
    }
}

/// Reads commands from stdin until it closes or the user quits.
pub async fn run<S, O>(app: &mut App<S, O>, output: &O) -> Result<()>
where
    S: QuizStore + Clone,
    O: QuizOutput + Clone,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        if is_quit(&line) {
            break;
        }
        let result = match line.parse::<PlayCommand>() {
            std::result::Result::Ok(command) => execute(app, command).await,
            Err(e) => Err(e),
        };
        report(output, result);
    }
    Ok(())
}
