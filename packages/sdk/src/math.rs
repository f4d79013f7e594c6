//! Integer scaling between display units and base (atomic) units.
//!
//! Balances can exceed 2^53, so nothing here goes through floating point —
//! scaling is u128 multiplication / integer division against `10^decimals`,
//! and the fractional part only materialises at the final formatting step.

use crate::error::{Error, Result};

/// `10^decimals` as u128. Overflows are impossible for any u8 exponent a
/// real mint carries (SPL caps decimals well below 38).
fn pow10(decimals: u8) -> Result<u128> {
    10u128
        .checked_pow(decimals as u32)
        .ok_or(Error::MathOverflow)
}

/// Scale a display-unit amount up to base (atomic) units: `v × 10^decimals`.
pub fn to_base_units(display: u64, decimals: u8) -> Result<u64> {
    let scaled = (display as u128)
        .checked_mul(pow10(decimals)?)
        .ok_or(Error::MathOverflow)?;
    u64::try_from(scaled).map_err(|_| Error::MathOverflow)
}

/// Scale a base-unit amount down to whole display units, truncating the
/// fractional part (integer division).
pub fn to_display_units(base: u64, decimals: u8) -> Result<u64> {
    Ok(((base as u128) / pow10(decimals)?) as u64)
}

/// Signed balance delta `post − pre`, widened so no pair of u64 balances can
/// overflow.
pub fn balance_delta(post: u64, pre: u64) -> i128 {
    post as i128 - pre as i128
}

/// Render a base-unit amount as a decimal string, e.g. `2400 * 10^8` with
/// 8 decimals → `"2400.00000000"`. Pure string work; no floats.
pub fn format_units(base: u64, decimals: u8) -> String {
    if decimals == 0 {
        return base.to_string();
    }
    let divisor = 10u128.pow(decimals as u32);
    let whole = (base as u128) / divisor;
    let frac = (base as u128) % divisor;
    format!("{whole}.{frac:0width$}", width = decimals as usize)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_and_display_round_trip() {
        for decimals in 0u8..=12 {
            for v in [0u64, 1, 7, 2400, 1_000_000] {
                let base = to_base_units(v, decimals).unwrap();
                assert_eq!(to_display_units(base, decimals).unwrap(), v);
            }
        }
    }

    #[test]
    fn display_scaling_truncates() {
        // 2.9 tokens at 8 decimals → 2 whole display units
        assert_eq!(to_display_units(290_000_000, 8).unwrap(), 2);
    }

    #[test]
    fn scaling_overflow_is_an_error() {
        assert!(matches!(to_base_units(u64::MAX, 8), Err(Error::MathOverflow)));
    }

    #[test]
    fn deltas_are_exact_beyond_f64_precision() {
        // Both balances above 2^53: f64 would lose the low digits.
        let pre = 9_007_199_254_740_993u64; // 2^53 + 1
        let post = pre + 1;
        assert_eq!(balance_delta(post, pre), 1);
        assert_eq!(balance_delta(0, u64::MAX), -(u64::MAX as i128));
    }

    #[test]
    fn formatting_pads_the_fraction() {
        assert_eq!(format_units(240_000_000_000, 8), "2400.00000000");
        assert_eq!(format_units(4_000_000_001, 9), "4.000000001");
        assert_eq!(format_units(42, 0), "42");
    }
}
