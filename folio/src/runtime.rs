//! The event loop: terminal input, measurement deadlines, and animation
//! ticks drive frames of the page.

use std::time::Instant;

use chrono::Datelike;
use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, error, info, trace, warn};
use pagedom::{Event, Terminal};
use tokio::time::{MissedTickBehavior, sleep_until};

use crate::app::{Action, Portfolio};
use crate::config::Config;
use crate::error::FolioError;

/// Branch for `tokio::select!` that never fires without a deadline.
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

/// Run the page until the user quits. The terminal is restored before
/// this returns, on success or error.
pub async fn run(config: Config) -> Result<(), FolioError> {
    let mut terminal = Terminal::new()?;
    let (width, height) = terminal.size();
    let year = chrono::Local::now().year();

    let frame_duration = config.motion.frame();
    let mut page = Portfolio::new(config, width, height, year, Instant::now());

    let mut events = EventStream::new();
    let mut animation_interval = tokio::time::interval(frame_duration);
    animation_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    info!("event loop started");
    loop {
        let now = Instant::now();
        terminal.draw(page.root(), &page.render_frame(now), page.background())?;

        let next_deadline = page.next_deadline();
        let animating = page.is_animating(now);

        tokio::select! {
            maybe_event = events.next() => {
                let Some(result) = maybe_event else {
                    debug!("event stream closed");
                    break;
                };
                let event = match result {
                    Ok(event) => event,
                    Err(e) => {
                        error!("event stream error: {e}");
                        continue;
                    }
                };
                trace!("crossterm event: {event:?}");
                let Some(event) = Event::from_crossterm(event) else {
                    continue;
                };
                if let Event::Resize { width, height } = event {
                    terminal.resize(width, height);
                }
                match page.handle_event(event, Instant::now()) {
                    Some(Action::Quit) => break,
                    Some(Action::OpenExternal(target)) => {
                        if let Err(e) = open::that(&target) {
                            warn!("failed to open {target}: {e}");
                        }
                    }
                    None => {}
                }
            }

            _ = sleep_until_optional(next_deadline) => {
                trace!("measurement deadline reached");
                page.frame(Instant::now());
            }

            _ = animation_interval.tick(), if animating => {
                page.frame(Instant::now());
            }
        }
    }

    page.teardown();
    info!("event loop stopped");
    Ok(())
}
