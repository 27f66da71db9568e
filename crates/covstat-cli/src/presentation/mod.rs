pub mod color;
pub mod formatters;
pub mod table;
pub mod views;

pub use color::{AnsiPainter, Color, Painter, PlainPainter};
pub use table::{Column, Table};
