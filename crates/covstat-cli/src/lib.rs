// NOTE: covstat Layering
//
// types   -> entities and the validated record decoder (no I/O)
// engine  -> timeline reconstruction, snapshot diffing, ordering (pure)
// runtime -> configuration, HTTP transport, live polling loop
// cli     -> argument parsing, table rendering, per-command handlers
//
// The diff cache is an explicit value owned by the live loop, and colors stay
// symbolic until a Painter renders them, so both are testable on plain
// strings without a network or a terminal.

mod args;
mod commands;
pub mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
