pub const BAR_GLYPH: char = '█';

/// Horizontal bar for `value` scaled so that `max` fills `width` cells.
/// Empty when either side is missing or non-positive.
pub fn render_bar(value: Option<f64>, max: Option<f64>, width: usize) -> String {
    let (Some(value), Some(max)) = (value, max) else {
        return String::new();
    };
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }

    let filled = (value / max * width as f64)
        .round()
        .clamp(0.0, width as f64) as usize;
    std::iter::repeat_n(BAR_GLYPH, filled).collect()
}
