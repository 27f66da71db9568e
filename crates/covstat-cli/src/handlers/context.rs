use crate::presentation::{Painter, Table};
use anyhow::Result;
use covstat_runtime::Error;
use std::io::{self, Write};
use tracing::debug;

/// Printed in place of a table when a one-shot fetch fails
pub const FETCH_FAILED: &str = "Failed to fetch data.";

/// Output sinks and styling shared by every handler
pub struct HandlerContext<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    painter: &'a dyn Painter,
}

impl<'a> HandlerContext<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write, painter: &'a dyn Painter) -> Self {
        Self { out, err, painter }
    }

    pub fn print_headers(&mut self, table: &Table) -> io::Result<()> {
        table.print_headers(&mut *self.out, self.painter)
    }

    pub fn print_row<S: AsRef<str>>(&mut self, table: &Table, cells: &[S]) -> io::Result<()> {
        table.print_row(&mut *self.out, self.painter, cells)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// One terse line on the error sink; details only reach the debug log
    pub fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{}", message)
    }

    pub fn fetch_failed(&mut self, error: &Error) -> Result<()> {
        debug!(error = %error, "fetch failed");
        self.report(FETCH_FAILED)?;
        Ok(())
    }
}
