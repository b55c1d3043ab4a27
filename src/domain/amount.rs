use alloy::primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint, Sign};

const DISPLAY_FRACTION_DIGITS: u32 = 2;
const GROUP_SIZE: usize = 3;
const GROUP_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';
const CURRENCY_PREFIX: &str = "$";

/// Converts a raw on-chain amount into whole token units: `raw / 10^decimals`.
///
/// The result is exact, the raw integer becomes the unscaled value and
/// `decimals` the scale.
pub fn normalize(raw: U256, decimals: u8) -> BigDecimal {
    let magnitude = BigUint::from_bytes_be(&raw.to_be_bytes::<32>());
    BigDecimal::new(BigInt::from(magnitude), i64::from(decimals))
}

/// Formats an amount as US dollars, e.g. `$1,234,567.89`.
///
/// Rounds half up to two fraction digits.
pub fn format_usd(amount: &BigDecimal) -> String {
    let (unscaled, scale) = amount.as_bigint_and_exponent();
    let negative = unscaled.sign() == Sign::Minus;
    let cents = rescale_to_cents(unscaled.magnitude(), scale);

    let digits = format!(
        "{:0>width$}",
        cents.to_string(),
        width = DISPLAY_FRACTION_DIGITS as usize + 1
    );
    let (integer, fraction) = digits.split_at(digits.len() - DISPLAY_FRACTION_DIGITS as usize);

    let sign = if negative && cents != BigUint::from(0u8) { "-" } else { "" };

    format!(
        "{sign}{CURRENCY_PREFIX}{}{DECIMAL_SEPARATOR}{fraction}",
        group_thousands(integer)
    )
}

/// Exact decimal notation without exponent, e.g. `0.000001` or `1200`.
pub fn to_plain_string(amount: &BigDecimal) -> String {
    let (unscaled, scale) = amount.as_bigint_and_exponent();
    let sign = if unscaled.sign() == Sign::Minus { "-" } else { "" };
    let digits = unscaled.magnitude().to_string();

    if scale <= 0 {
        let zeros = "0".repeat(scale.unsigned_abs() as usize);
        return if digits == "0" {
            digits
        } else {
            format!("{sign}{digits}{zeros}")
        };
    }

    let scale = scale as usize;
    let digits = format!("{:0>width$}", digits, width = scale + 1);
    let (integer, fraction) = digits.split_at(digits.len() - scale);

    format!("{sign}{integer}{DECIMAL_SEPARATOR}{fraction}")
}

fn rescale_to_cents(magnitude: &BigUint, scale: i64) -> BigUint {
    let target = i64::from(DISPLAY_FRACTION_DIGITS);

    if scale <= target {
        return magnitude * pow10((target - scale) as u32);
    }

    let divisor = pow10((scale - target) as u32);
    let quotient = magnitude / &divisor;
    let remainder = magnitude % &divisor;

    if remainder * 2u32 >= divisor {
        quotient + 1u32
    } else {
        quotient
    }
}

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u8).pow(exponent)
}

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / GROUP_SIZE);

    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % GROUP_SIZE == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_normalize_exact() {
        assert_eq!(normalize(U256::from(100_000_000u64), 6), dec("100"));
        assert_eq!(normalize(U256::from(200_000_000_000_000_000u128), 18), dec("0.2"));
        assert_eq!(normalize(U256::from(50u64), 2), dec("0.5"));
    }

    #[test]
    fn test_normalize_zero_decimals() {
        assert_eq!(normalize(U256::from(42u64), 0), dec("42"));
    }

    #[test]
    fn test_normalize_keeps_every_digit() {
        let raw = U256::from_str("123456789012345678901234567890123").unwrap();
        let normalized = normalize(raw, 18);

        assert_eq!(normalized, dec("123456789012345.678901234567890123"));
    }

    #[test]
    fn test_normalize_max_value() {
        let normalized = normalize(U256::MAX, 0);
        assert_eq!(normalized, dec(&U256::MAX.to_string()));
    }

    #[test]
    fn test_normalize_multiplied_back_gives_raw() {
        let raw = U256::from(5_000_000_000u64);
        let normalized = normalize(raw, 9);
        let back = normalized * BigDecimal::from(1_000_000_000i64);

        assert_eq!(back, dec("5000000000"));
    }

    #[test]
    fn test_to_plain_string() {
        assert_eq!(to_plain_string(&normalize(U256::from(1u64), 18)), "0.000000000000000001");
        assert_eq!(to_plain_string(&normalize(U256::from(100_000_000u64), 6)), "100.000000");
        assert_eq!(to_plain_string(&dec("12e2")), "1200");
        assert_eq!(to_plain_string(&dec("-0.25")), "-0.25");
        assert_eq!(to_plain_string(&dec("0")), "0");
    }

    #[test]
    fn test_format_usd_groups_and_rounds() {
        assert_eq!(format_usd(&dec("1234567.891")), "$1,234,567.89");
        assert_eq!(format_usd(&dec("1234567.895")), "$1,234,567.90");
        assert_eq!(format_usd(&dec("999.994")), "$999.99");
        assert_eq!(format_usd(&dec("999.995")), "$1,000.00");
    }

    #[test]
    fn test_format_usd_zero() {
        assert_eq!(format_usd(&dec("0")), "$0.00");
        assert_eq!(format_usd(&BigDecimal::from(0i64)), "$0.00");
    }

    #[test]
    fn test_format_usd_small_values() {
        assert_eq!(format_usd(&dec("0.5")), "$0.50");
        assert_eq!(format_usd(&dec("0.004")), "$0.00");
        assert_eq!(format_usd(&dec("0.005")), "$0.01");
        assert_eq!(format_usd(&dec("100.7")), "$100.70");
    }

    #[test]
    fn test_format_usd_grouping_boundaries() {
        assert_eq!(format_usd(&dec("100")), "$100.00");
        assert_eq!(format_usd(&dec("1000")), "$1,000.00");
        assert_eq!(format_usd(&dec("100000")), "$100,000.00");
        assert_eq!(format_usd(&dec("1000000")), "$1,000,000.00");
    }

    #[test]
    fn test_format_usd_negative_scale() {
        assert_eq!(format_usd(&dec("12e3")), "$12,000.00");
    }

    #[test]
    fn test_format_usd_negative() {
        assert_eq!(format_usd(&dec("-1234.5")), "-$1,234.50");
        assert_eq!(format_usd(&dec("-0.001")), "$0.00");
    }

    #[test]
    fn test_format_normalized_18_decimals() {
        let raw = U256::from_str("83512345678912345678901234567").unwrap();
        assert_eq!(format_usd(&normalize(raw, 18)), "$83,512,345,678.91");
    }
}
