//! Currency unit conversion for display.
//!
//! Amounts arrive in the smallest unit; Myria has 12 decimals.

/// Decimal places of the Myria unit.
pub const MYRIA_DECIMALS: u32 = 12;

/// Display label of the Myria unit.
pub const MYRIA_SYMBOL: &str = "Myria";

/// Convert an integer amount with `decimals` places into a decimal string.
///
/// Exact (no float rounding); trailing fractional zeros are trimmed.
///
/// ```rust
/// use myriad_core::units::format_units;
///
/// assert_eq!(format_units(1_000_000_000_000, 12), "1");
/// assert_eq!(format_units(500_000_000_000, 12), "0.5");
/// assert_eq!(format_units(1_234_500, 3), "1234.5");
/// ```
pub fn format_units(value: u128, decimals: u32) -> String {
    // Past 38 decimals the scale exceeds u128, so every value is fractional.
    let (whole, frac) = match 10u128.checked_pow(decimals) {
        Some(scale) => (value / scale, value % scale),
        None => (0, value),
    };

    if frac == 0 {
        return whole.to_string();
    }

    let frac = format!("{:0width$}", frac, width = decimals as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// Format a smallest-unit amount as Myria, e.g. `"0.5 Myria"`.
pub fn format_myria(value: u128) -> String {
    format!("{} {}", format_units(value, MYRIA_DECIMALS), MYRIA_SYMBOL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_myria() {
        assert_eq!(format_myria(1_000_000_000_000), "1 Myria");
        assert_eq!(format_myria(500_000_000_000), "0.5 Myria");
        assert_eq!(format_myria(0), "0 Myria");
        assert_eq!(format_myria(1), "0.000000000001 Myria");
        assert_eq!(format_myria(12_340_000_000_000_000), "12340 Myria");
    }

    #[test]
    fn test_format_units_zero_decimals() {
        assert_eq!(format_units(42, 0), "42");
    }

    #[test]
    fn test_format_units_beyond_u128_scale() {
        assert_eq!(format_units(0, 40), "0");
        assert_eq!(format_units(5, 40), format!("0.{}5", "0".repeat(39)));
        assert_eq!(format_units(u128::MAX, 39), format!("0.{}", u128::MAX));
    }
}
