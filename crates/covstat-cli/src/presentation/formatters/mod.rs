pub mod bar;
pub mod number;
pub mod text;
pub mod time;

pub use number::NumberFormatter;

/// Rendered in place of a metric the source did not provide
pub const PLACEHOLDER: &str = "-";
