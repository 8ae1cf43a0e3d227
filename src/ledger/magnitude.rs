//! Compact magnitude strings ("1.2K", "3.45M", "1.00T").
//!
//! Unit stats and reward text use these strings for display. Every suffixed
//! tier keeps two decimal digits and the sub-1000 tier is integral, so a
//! format/parse round trip loses precision. [`quantize`] reproduces that loss
//! for values stored numerically, keeping balance numbers identical to what a
//! string-stored stat would hold.

use thiserror::Error;

/// Suffix tiers in ascending order.
const TIERS: [(f64, char); 4] = [
    (1_000.0, 'K'),
    (1_000_000.0, 'M'),
    (1_000_000_000.0, 'B'),
    (1_000_000_000_000.0, 'T'),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MagnitudeError {
    #[error("not a magnitude: {0:?}")]
    Invalid(String),
    #[error("negative magnitude: {0:?}")]
    Negative(String),
}

/// Parses a magnitude string. Suffixes are case-insensitive.
///
/// Suffixed values are rounded to the nearest integer, since two decimals at
/// the K tier or above always describe a whole number.
pub fn parse_magnitude(input: &str) -> Result<f64, MagnitudeError> {
    let trimmed = input.trim();
    let (number, scale) = match trimmed.chars().last().map(|c| c.to_ascii_uppercase()) {
        Some(suffix) if suffix.is_ascii_alphabetic() => {
            let scale = TIERS
                .iter()
                .find(|(_, s)| *s == suffix)
                .map(|(scale, _)| *scale)
                .ok_or_else(|| MagnitudeError::Invalid(input.to_string()))?;
            (&trimmed[..trimmed.len() - 1], scale)
        }
        _ => (trimmed, 1.0),
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| MagnitudeError::Invalid(input.to_string()))?;
    if !value.is_finite() {
        return Err(MagnitudeError::Invalid(input.to_string()));
    }
    if value < 0.0 {
        return Err(MagnitudeError::Negative(input.to_string()));
    }

    if scale > 1.0 {
        Ok((value * scale).round())
    } else {
        Ok(value)
    }
}

/// Tier chosen for a value: scale, suffix, and the value in hundredths of
/// that scale. `None` means the integral sub-1000 tier.
fn tier_for(value: f64) -> Option<(f64, char, f64)> {
    let mut index = TIERS.iter().rposition(|(scale, _)| value >= *scale)?;
    loop {
        let (scale, suffix) = TIERS[index];
        let hundredths = (value / scale * 100.0).round();
        // 999.999K rounds to 1000.00K; promote so the string is canonical
        if hundredths >= 100_000.0 && index + 1 < TIERS.len() {
            index += 1;
            continue;
        }
        return Some((scale, suffix, hundredths));
    }
}

/// Formats a value as a compact magnitude string.
pub fn format_magnitude(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    match tier_for(value) {
        Some((_, suffix, hundredths)) => format!("{:.2}{}", hundredths / 100.0, suffix),
        None => format!("{}", value.floor() as u64),
    }
}

/// The numeric value `parse_magnitude(&format_magnitude(value))` would yield.
pub fn quantize(value: f64) -> u64 {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    match tier_for(value) {
        Some((scale, _, hundredths)) => (hundredths * scale / 100.0).round() as u64,
        None => value.floor() as u64,
    }
}
