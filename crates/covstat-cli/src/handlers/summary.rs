use super::HandlerContext;
use crate::presentation::views::summary;
use anyhow::Result;
use covstat_runtime::{StatsClient, StatsSource};

pub fn handle<S: StatsSource>(ctx: &mut HandlerContext<'_>, client: &StatsClient<S>) -> Result<()> {
    let stats = match client.summary() {
        Ok(stats) => stats,
        Err(error) => return ctx.fetch_failed(&error),
    };

    let table = summary::table();
    ctx.print_headers(&table)?;
    ctx.print_row(&table, &summary::row(&stats))?;
    Ok(())
}
