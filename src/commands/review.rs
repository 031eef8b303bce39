use anyhow::*;
use log::debug;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Instant};

use crate::commands::*;
use crate::output::QuizOutput;
use crate::review::ReviewSlideshow;
use crate::slides::KeyOutcome;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Feeds stdin lines to the slideshow as key presses, and wall clock time to
/// its auto-advance timer.
pub async fn run<O: QuizOutput>(review: &mut ReviewSlideshow<O>, output: &O) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = time::interval(TICK_INTERVAL);
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };
                if is_quit(&line) {
                    break;
                }
                let key = key_for_line(&line);
                if review.handle_key(key).await == KeyOutcome::Ignored {
                    report(
                        output,
                        Err(anyhow!("Unknown key {:?}, use right, left, space or quit", line)),
                    );
                }
            }
            now = interval.tick() => {
                let moves = review.tick(now.duration_since(last_tick)).await;
                if moves > 0 {
                    debug!("Auto-advanced {} slide(s)", moves);
                }
                last_tick = now;
            }
        }
    }
    Ok(())
}

/// Pressing enter on an empty line stands for the space bar.
fn key_for_line(line: &str) -> &str {
    match line.trim() {
        "" => "space",
        "l" => "left",
        "r" => "right",
        key => key,
    }
}
