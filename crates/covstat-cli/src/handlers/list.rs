use super::HandlerContext;
use crate::presentation::views::list;
use anyhow::Result;
use covstat_engine::{SortKey, sort_descending};
use covstat_runtime::{StatsClient, StatsSource};

pub fn handle<S: StatsSource>(
    ctx: &mut HandlerContext<'_>,
    client: &StatsClient<S>,
    sort: SortKey,
) -> Result<()> {
    let mut entries = match client.list() {
        Ok(entries) => entries,
        Err(error) => return ctx.fetch_failed(&error),
    };

    sort_descending(&mut entries, sort);

    let table = list::table();
    ctx.print_headers(&table)?;
    for entry in &entries {
        ctx.print_row(&table, &list::row(entry))?;
    }

    Ok(())
}
