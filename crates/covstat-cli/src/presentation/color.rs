use owo_colors::OwoColorize;

/// Symbolic column color. Turning it into terminal styling is the
/// [`Painter`]'s job, so tables render identically into plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Default,
    Red,
    Yellow,
    Green,
    Blue,
}

pub trait Painter {
    fn paint(&self, text: &str, color: Color) -> String;
}

/// Leaves text untouched (pipes, tests, `--color never`)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}

/// ANSI styling via owo-colors
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, text: &str, color: Color) -> String {
        match color {
            Color::Default => text.to_string(),
            Color::Red => text.red().to_string(),
            Color::Yellow => text.yellow().to_string(),
            Color::Green => text.green().to_string(),
            Color::Blue => text.blue().to_string(),
        }
    }
}
