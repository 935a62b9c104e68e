//! Polling loop that drives the engine

use std::{future::Future, io::Write, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::{error::Result, state::Engine};

/// Run one tick: update, write the line, then play the tick sound
pub fn run_once<W: Write>(engine: &mut Engine, out: &mut W) -> Result<()> {
    let json = engine.config().json;
    engine.update_state()?;
    engine.render().emit(out, json)?;
    engine.tick_sound();
    Ok(())
}

/// Tick every update interval until `shutdown` resolves.
///
/// In one-line mode exactly one tick runs. Any error ends the loop.
pub async fn run<W, F>(mut engine: Engine, out: &mut W, shutdown: F) -> Result<()>
where
    W: Write,
    F: Future<Output = ()>,
{
    if engine.config().one_line {
        return run_once(&mut engine, out);
    }

    let period = Duration::from_secs(engine.config().update_interval);
    info!("Starting ticker, updating every {}s", period.as_secs());

    let mut ticks = interval(period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                run_once(&mut engine, out)?;
                debug!("Tick done: state={}, seconds_left={:?}", engine.displayed_state(), engine.seconds_left());
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}
