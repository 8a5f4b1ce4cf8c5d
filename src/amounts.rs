//! Fixed-point helpers for 10^18-scaled multipliers and token amounts.

use crate::error::Error;

/// Scale of `k` multipliers: `10^18` is a 1x payout.
pub const MULTIPLIER_SCALE: i128 = 1_000_000_000_000_000_000;

/// Largest `decimals` accepted by [`format_amount`].
pub const MAX_DECIMALS: u32 = 38;

/// Renders `value / 10^decimals` without trailing fractional zeros.
pub fn format_amount(value: i128, decimals: u32) -> Result<String, Error> {
    if decimals > MAX_DECIMALS {
        return Err(Error::DecimalsOutOfRange {
            decimals,
            max: MAX_DECIMALS,
        });
    }
    let sign = if value < 0 { "-" } else { "" };
    let digits = value.unsigned_abs().to_string();
    let decimals = decimals as usize;

    let (whole, fraction) = if digits.len() > decimals {
        digits.split_at(digits.len() - decimals)
    } else {
        ("0", digits.as_str())
    };
    let fraction = format!("{fraction:0>decimals$}");
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        Ok(format!("{sign}{whole}"))
    } else {
        Ok(format!("{sign}{whole}.{fraction}"))
    }
}

/// `(result_k - 10^18) * multiplier / 10^18`: the signed balance change of a
/// trial, truncated toward zero.
pub fn calculate_delta_amount(result_k: u128, multiplier: u128) -> Result<i128, Error> {
    let overflow = |what: &str| Error::AmountOverflow {
        reason: format!("{what} (result_k {result_k}, multiplier {multiplier})"),
    };
    let result_k = i128::try_from(result_k).map_err(|_| overflow("result_k exceeds i128"))?;
    let multiplier =
        i128::try_from(multiplier).map_err(|_| overflow("multiplier exceeds i128"))?;

    (result_k - MULTIPLIER_SCALE)
        .checked_mul(multiplier)
        .map(|scaled| scaled / MULTIPLIER_SCALE)
        .ok_or_else(|| overflow("delta exceeds i128"))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[test]
    fn formats_with_trimmed_fraction() {
        assert_eq!(format_amount(1_234_560_000, 6).unwrap(), "1234.56");
        assert_eq!(format_amount(1_000_000, 6).unwrap(), "1");
        assert_eq!(format_amount(1, 6).unwrap(), "0.000001");
        assert_eq!(format_amount(0, 6).unwrap(), "0");
        assert_eq!(format_amount(-2_500_000, 6).unwrap(), "-2.5");
        assert_eq!(format_amount(42, 0).unwrap(), "42");
        assert_eq!(format_amount(1_000_000_000_000_000_000, 18).unwrap(), "1");
    }

    #[test]
    fn decimals_are_bounded() {
        assert_eq!(
            format_amount(1, MAX_DECIMALS).unwrap(),
            format!("0.{}1", "0".repeat(37))
        );
        assert_eq!(
            format_amount(i128::MAX, MAX_DECIMALS).unwrap(),
            "1.70141183460469231731687303715884105727"
        );
        assert!(matches!(
            format_amount(1, MAX_DECIMALS + 1),
            Err(Error::DecimalsOutOfRange { decimals: 39, max: 38 })
        ));
        assert!(matches!(
            format_amount(1, u32::MAX),
            Err(Error::DecimalsOutOfRange { .. })
        ));
    }

    #[test]
    fn delta_is_signed_profit_or_loss() {
        let one = 1_000_000_000_000_000_000_u128;
        assert_eq!(
            calculate_delta_amount(2 * one, one).unwrap(),
            1_000_000_000_000_000_000
        );
        assert_eq!(calculate_delta_amount(0, 50).unwrap(), -50);
        assert_eq!(calculate_delta_amount(one, 123).unwrap(), 0);
        assert_eq!(calculate_delta_amount(one + one / 2, 10).unwrap(), 5);
    }

    #[test]
    fn delta_overflow_is_reported() {
        assert!(matches!(
            calculate_delta_amount(u128::MAX, 1),
            Err(Error::AmountOverflow { .. })
        ));
        assert!(matches!(
            calculate_delta_amount(u128::from(u64::MAX) * 1_000, u128::from(u64::MAX) * 1_000),
            Err(Error::AmountOverflow { .. })
        ));
    }
}
