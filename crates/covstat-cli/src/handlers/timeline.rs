use super::HandlerContext;
use crate::presentation::views::timeline;
use anyhow::Result;
use covstat_runtime::{StatsClient, StatsSource};
use covstat_types::Subject;

pub fn handle<S: StatsSource>(
    ctx: &mut HandlerContext<'_>,
    client: &StatsClient<S>,
    territory: &str,
    days: u32,
    subject: Option<Subject>,
) -> Result<()> {
    let history = match client.timeline(territory, days) {
        Ok(history) => history,
        Err(error) => return ctx.fetch_failed(&error),
    };

    match subject {
        Some(subject) => {
            let table = timeline::subject_table(subject);
            ctx.print_headers(&table)?;
            for cells in timeline::subject_rows(&history, subject) {
                ctx.print_row(&table, &cells)?;
            }
        }
        None => {
            let table = timeline::table();
            ctx.print_headers(&table)?;
            for entry in history.entries() {
                ctx.print_row(&table, &timeline::row(entry))?;
            }
        }
    }

    Ok(())
}
