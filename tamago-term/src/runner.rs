//! The async event loop.
//!
//! Three event sources feed one loop:
//!
//! | Source        | Period                | Effect                      |
//! |---------------|-----------------------|-----------------------------|
//! | Decay ticker  | `decay_interval_ms`   | one decay tick, re-render   |
//! | Cooldown      | once per action       | clear `busy`, re-render     |
//! | Input lines   | on user input         | apply command, re-render    |
//!
//! The decay ticker is its own task holding a [`PetHandle`]; it is aborted
//! when the loop ends, so nothing outlives the session.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use tamago_core::Millis;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use crate::commands::Command;
use crate::handle::PetHandle;
use crate::render;
use crate::session::{Reply, Session};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable frames with bars.
    #[default]
    Text,
    /// One `PetSnapshot` JSON object per line.
    Json,
}

/// Session time measured from loop start.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    start: Instant,
}

impl SessionClock {
    /// Start counting now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since start.
    #[must_use]
    pub fn now(&self) -> Millis {
        Millis(u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX))
    }

    /// Wall-clock instant of a session time.
    #[must_use]
    pub fn instant_of(&self, at: Millis) -> Instant {
        self.start + Duration::from_millis(at.0)
    }
}

/// Spawn the periodic decay task. Each tick is reported on `ticks`.
pub fn spawn_decay_ticker(
    handle: PetHandle,
    period: Duration,
    ticks: mpsc::Sender<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let outcome = handle.lock().decay();
            debug!(penalties = outcome.penalties(), "decay tick");
            if ticks.send(()).await.is_err() {
                break;
            }
        }
    })
}

/// Run `session` until `quit` or end of input.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub async fn run<R, W>(mut session: Session, input: R, mut out: W, format: Format) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let clock = SessionClock::start();
    let period = Duration::from_millis(session.config().timing.decay_interval_ms);
    let (tick_tx, mut tick_rx) = mpsc::channel(4);
    let ticker = spawn_decay_ticker(session.handle(), period, tick_tx);

    let mut lines = input.lines();
    let result = async {
        draw(&mut session, &clock, &mut out, format)?;
        loop {
            let cooldown = session.cooldown_deadline().map(|at| clock.instant_of(at));
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("reading input")? else {
                        debug!("input closed");
                        break;
                    };
                    let command = match line.parse::<Command>() {
                        Ok(command) => command,
                        Err(err) => {
                            warn!(%err, "ignoring input");
                            if format == Format::Text {
                                writeln!(out, "> {err} (type `help`)")?;
                            }
                            continue;
                        }
                    };
                    let reply = session.apply(command, clock.now());
                    if reply == Reply::Quit {
                        break;
                    }
                    if format == Format::Text {
                        if let Some(message) = render::reply_message(&reply) {
                            writeln!(out, "{message}")?;
                        }
                    }
                    draw(&mut session, &clock, &mut out, format)?;
                }
                Some(()) = tick_rx.recv() => {
                    draw(&mut session, &clock, &mut out, format)?;
                }
                () = sleep_until_some(cooldown) => {
                    session.handle().lock().poll(clock.now());
                    draw(&mut session, &clock, &mut out, format)?;
                }
            }
        }
        anyhow::Ok(())
    }
    .await;

    ticker.abort();
    result
}

async fn sleep_until_some(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

fn draw<W: Write>(
    session: &mut Session,
    clock: &SessionClock,
    out: &mut W,
    format: Format,
) -> Result<()> {
    let snapshot = session.frame(clock.now());
    match format {
        Format::Text => writeln!(out, "{}\n", render::text_frame(&snapshot))?,
        Format::Json => writeln!(out, "{}", snapshot.to_json()?)?,
    }
    out.flush()?;
    Ok(())
}
