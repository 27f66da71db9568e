/// Clip `text` to `max_len` characters, ending in `...` when shortened
pub fn clip(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        // Too narrow for an ellipsis
        text.chars().take(max_len).collect()
    } else {
        let clipped: String = text.chars().take(max_len - 3).collect();
        format!("{}...", clipped)
    }
}

/// Right-pad with spaces to `width` characters; longer text is left as is
pub fn pad_end(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}
