use anyhow::*;
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use crate::app::{App, Page};
use crate::output::terminal::TerminalOutput;
use crate::review::ReviewSlideshow;
use crate::slides::Settings;
use crate::storage::{FileQuizStore, QuizStore};

mod app;
mod commands;
mod output;
mod quiz;
mod review;
mod slides;
mod storage;

#[derive(Debug, Parser)]
#[command(name = "quizzy", version, about = "Multiple choice quizzes in the terminal")]
struct Cli {
    /// Directory holding the stored quiz and its progress
    #[arg(long, env = "QUIZZY_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Import a .json or .csv quiz and start taking it
    Import { file: PathBuf },
    /// Resume the stored quiz
    Play,
    /// Flip through the stored quiz as flashcards
    Review(ReviewArgs),
    /// Show progress on the stored quiz
    Status,
    /// Forget the stored quiz and its progress
    Clear,
}

#[derive(Debug, Args)]
struct ReviewArgs {
    /// Milliseconds each card stays up while auto-advancing
    #[arg(long, default_value_t = 3000)]
    duration_ms: u64,
    /// How many cards on each side of the current one get their images resolved
    #[arg(long, default_value_t = 1)]
    neighbors: usize,
    /// Card to jump back to after the last one (0-based)
    #[arg(long, default_value_t = 0)]
    loop_index: usize,
    /// Card to never show (0-based)
    #[arg(long)]
    skip: Option<usize>,
    /// Start with auto-advance paused
    #[arg(long)]
    no_auto: bool,
    /// Directory that local question images are relative to
    #[arg(long, default_value = ".")]
    images_dir: PathBuf,
}

impl ReviewArgs {
    fn settings(&self) -> Settings {
        Settings {
            neighbors: self.neighbors,
            loop_index: self.loop_index,
            skip_index: self.skip,
            auto_advance: !self.no_auto,
            slide_duration: Duration::from_millis(self.duration_ms),
            ..Default::default()
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = FileQuizStore::open(cli.data_dir.as_deref())?;
    let output = TerminalOutput;

    match cli.command {
        Command::Import { file } => {
            let mut app = App::new(store, output);
            app.import(&file).await?;
            commands::play::run(&mut app, &output).await
        }
        Command::Play => {
            let mut app = App::new(store, output);
            app.open_quiz().await?;
            if app.page() == Page::Home {
                return Ok(());
            }
            commands::play::run(&mut app, &output).await
        }
        Command::Review(args) => {
            let quiz = store
                .load()?
                .context("There is no quiz to review, import one first")?;
            let mut review =
                ReviewSlideshow::new(&quiz, args.settings(), args.images_dir.clone(), output)?;
            review.begin().await?;
            commands::review::run(&mut review, &output).await
        }
        Command::Status => App::new(store, output).status(),
        Command::Clear => {
            store.clear()?;
            info!("Cleared stored quiz {:?}", store.path());
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(cli))
}
