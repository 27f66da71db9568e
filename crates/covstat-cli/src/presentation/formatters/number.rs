use super::PLACEHOLDER;

/// Formats counts, deltas and growth percentages.
///
/// Rounding, when enabled, is half away from zero. The sign is derived from
/// the value: `-` for negatives, `+` for positives only when requested, and
/// nothing for zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormatter {
    pub includes_plus_sign: bool,
    pub rounds_floats: bool,
}

impl NumberFormatter {
    /// Absolute totals
    pub const COUNT: Self = Self::new(false, false);
    /// Signed changes between polls
    pub const DELTA: Self = Self::new(true, false);
    /// Signed, whole-number growth percentages
    pub const PERCENT: Self = Self::new(true, true);

    pub const fn new(includes_plus_sign: bool, rounds_floats: bool) -> Self {
        Self {
            includes_plus_sign,
            rounds_floats,
        }
    }

    pub fn format(&self, value: f64) -> String {
        let value = if self.rounds_floats {
            value.round()
        } else {
            value
        };
        let magnitude = value.abs();

        if value > 0.0 && self.includes_plus_sign {
            format!("+{}", magnitude)
        } else if value < 0.0 {
            format!("-{}", magnitude)
        } else {
            format!("{}", magnitude)
        }
    }

    pub fn format_optional(&self, value: Option<f64>) -> String {
        value
            .map(|v| self.format(v))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    /// A fraction as a percentage: `0.05` -> `+5%` with [`Self::PERCENT`]
    pub fn format_percent(&self, fraction: Option<f64>) -> String {
        match fraction {
            Some(fraction) => format!("{}%", self.format(fraction * 100.0)),
            None => PLACEHOLDER.to_string(),
        }
    }
}
