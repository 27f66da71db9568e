use super::HandlerContext;
use crate::presentation::Table;
use crate::presentation::formatters::time::{clock_time, format_delay};
use crate::presentation::views::live;
use anyhow::Result;
use covstat_runtime::{LiveEvent, LiveMonitor, Sleeper, StatsSource};
use std::io;
use tracing::{debug, warn};

/// Print the headers once, then stream changed territories forever.
/// Fetch failures are reported and retried; they never end the stream.
pub fn handle<S: StatsSource, Z: Sleeper>(
    ctx: &mut HandlerContext<'_>,
    monitor: &mut LiveMonitor<S, Z>,
) -> Result<()> {
    let table = start(ctx)?;
    monitor.run(|event| emit(ctx, &table, event))
}

/// Same stream as [`handle`], stopped after `cycles` polls
pub fn handle_cycles<S: StatsSource, Z: Sleeper>(
    ctx: &mut HandlerContext<'_>,
    monitor: &mut LiveMonitor<S, Z>,
    cycles: usize,
) -> Result<()> {
    let table = start(ctx)?;
    monitor.run_cycles(cycles, |event| emit(ctx, &table, event));
    Ok(())
}

fn start(ctx: &mut HandlerContext<'_>) -> Result<Table> {
    let table = live::table();
    ctx.print_headers(&table)?;
    ctx.flush()?;
    Ok(table)
}

fn emit(ctx: &mut HandlerContext<'_>, table: &Table, event: LiveEvent) {
    if let Err(e) = render_event(ctx, table, event, &clock_time()) {
        warn!(error = %e, "failed to write live output");
    }
}

pub fn render_event(
    ctx: &mut HandlerContext<'_>,
    table: &Table,
    event: LiveEvent,
    time: &str,
) -> io::Result<()> {
    match event {
        LiveEvent::Changes { changes, next_poll } => {
            for change in &changes {
                ctx.print_row(table, &live::row(time, change))?;
            }
            debug!(next_poll_secs = next_poll.as_secs(), "waiting for next poll");
            ctx.flush()
        }
        LiveEvent::FetchFailed { error, retry_in } => {
            debug!(error = %error, "live fetch failed");
            ctx.report(&format!(
                "Failed to fetch data. Retrying in {}.",
                format_delay(retry_in)
            ))
        }
    }
}
