use anyhow::*;
use log::warn;

use crate::output::{Message, QuizOutput};

pub mod play;
pub mod review;

fn is_quit(line: &str) -> bool {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => true,
        _ => false,
    }
}

fn report<O: QuizOutput>(output: &O, result: Result<()>) {
    if let Err(e) = result {
        warn!("{:#}", e);
        output.say(&Message::Error(format!("{}", e)));
    }
}
