//! Exact decimal arithmetic over arbitrary-precision rationals.
//!
//! Every amount passes through a [`BigRational`] between parsing and
//! rendering, so shifting between denominations never loses a digit. The
//! only lossy step in the whole pipeline is the deliberate truncation in
//! [`to_decimal_string`].

use std::str::FromStr;
use std::sync::LazyLock;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;
use regex::Regex;

use super::ConversionError;

static HEX_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0[xX])?([0-9a-fA-F]+)$").expect("valid regex"));

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)([0-9]*)\.?([0-9]*)$").expect("valid regex"));

/// Rationals whose denominator has prime factors other than 2 and 5 have no
/// finite decimal expansion. They never arise from denomination shifts or
/// decimal conversion rates, but rendering is capped here regardless.
const MAX_EXPANSION_DIGITS: u32 = 36;

/// Parse a non-negative integer written in hexadecimal, with or without a
/// `0x` prefix.
pub fn parse_hex_integer(value: &str) -> Result<BigInt, ConversionError> {
    let invalid = || ConversionError::InvalidNumericInput {
        value: value.to_owned(),
    };

    let digits = HEX_INTEGER
        .captures(value.trim())
        .and_then(|c| c.get(1))
        .ok_or_else(invalid)?;

    BigInt::parse_bytes(digits.as_str().as_bytes(), 16).ok_or_else(invalid)
}

/// Parse a base-10 decimal string such as `"12"`, `"0.5"`, `".25"` or
/// `"-3.0"` into an exact rational.
pub fn parse_decimal(value: &str) -> Result<BigRational, ConversionError> {
    let invalid = || ConversionError::InvalidNumericInput {
        value: value.to_owned(),
    };

    let Some((_full, [sign, integer_part, fractional_part])) =
        DECIMAL.captures(value.trim()).map(|c| c.extract::<3>())
    else {
        return Err(invalid());
    };
    if integer_part.is_empty() && fractional_part.is_empty() {
        return Err(invalid());
    }

    let parse = |digits: &str| -> Result<BigInt, ConversionError> {
        if digits.is_empty() {
            Ok(BigInt::zero())
        } else {
            BigInt::from_str(digits).map_err(|_| invalid())
        }
    };

    let shift = pow10(u32::try_from(fractional_part.len()).map_err(|_| invalid())?);
    let numerator = parse(integer_part)? * &shift + parse(fractional_part)?;
    let magnitude = BigRational::new(numerator, shift);

    Ok(if sign == "-" { -magnitude } else { magnitude })
}

/// Exact rational form of a floating-point ratio, taken from its shortest
/// round-tripping decimal representation. `280.45` becomes `28045/100`
/// rather than the binary approximation the `f64` actually stores.
///
/// Returns `None` for NaN, infinities and negative ratios.
pub fn rate_to_rational(rate: f64) -> Option<BigRational> {
    if !rate.is_finite() || rate.is_sign_negative() {
        return None;
    }
    parse_decimal(&rate.to_string()).ok()
}

/// 10^exponent
pub fn pow10(exponent: u32) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}

/// Render `value` in base 10 with at most `max_decimals` digits after the
/// decimal point.
///
/// Surplus digits are truncated toward zero, never rounded, and the result
/// carries no trailing zeros: `0.000000001` requested with 100 decimals is
/// `"0.000000001"`, and `2.8045` requested with 2 decimals is `"2.8"`.
/// `None` renders the exact expansion.
pub fn to_decimal_string(value: &BigRational, max_decimals: Option<u32>) -> String {
    let magnitude = value.abs();
    let exact_scale = terminating_scale(magnitude.denom());
    let scale = match (max_decimals, exact_scale) {
        (Some(max), Some(exact)) => max.min(exact),
        (Some(max), None) => max,
        (None, Some(exact)) => exact,
        (None, None) => MAX_EXPANSION_DIGITS,
    };

    let scaled = (magnitude.numer() * pow10(scale)) / magnitude.denom();
    let digits = scaled.to_string();
    let scale = scale as usize;
    let digits = if digits.len() <= scale {
        format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (integer_part, fractional_part) = digits.split_at(digits.len() - scale);
    let fractional_part = fractional_part.trim_end_matches('0');
    let sign = if value.is_negative() && !scaled.is_zero() {
        "-"
    } else {
        ""
    };

    if fractional_part.is_empty() {
        format!("{sign}{integer_part}")
    } else {
        format!("{sign}{integer_part}.{fractional_part}")
    }
}

/// Number of decimal digits needed to write `1/denominator` exactly, or
/// `None` if the expansion does not terminate.
fn terminating_scale(denominator: &BigInt) -> Option<u32> {
    let mut remaining = denominator.clone();
    let mut twos = 0u32;
    let mut fives = 0u32;
    let two = BigInt::from(2u8);
    let five = BigInt::from(5u8);

    while (&remaining % &two).is_zero() {
        remaining /= &two;
        twos += 1;
    }
    while (&remaining % &five).is_zero() {
        remaining /= &five;
        fives += 1;
    }

    remaining.is_one().then_some(twos.max(fives))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use proptest::prop_assert;
    use proptest::prop_assert_eq;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn hex_integers_parse_with_and_without_prefix() {
        assert_eq!(BigInt::from(1_000_000_000u64), parse_hex_integer("0x3b9aca00").unwrap());
        assert_eq!(BigInt::from(1_000_000_000u64), parse_hex_integer("3B9ACA00").unwrap());
        assert_eq!(BigInt::zero(), parse_hex_integer("0x0").unwrap());
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["", "0x", "0xzz", "-0x1", "0x1.5", "12 34"] {
            assert!(
                matches!(
                    parse_hex_integer(bad),
                    Err(ConversionError::InvalidNumericInput { .. })
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn decimals_parse_exactly() {
        assert_eq!(
            BigRational::new(BigInt::from(28045), BigInt::from(100)),
            parse_decimal("280.45").unwrap()
        );
        assert_eq!(
            BigRational::new(BigInt::from(1), BigInt::from(4)),
            parse_decimal(".25").unwrap()
        );
        assert_eq!(-BigRational::one(), parse_decimal("-1.0").unwrap());
        assert!(parse_decimal(".").is_err());
        assert!(parse_decimal("1e5").is_err());
    }

    #[test]
    fn conversion_rates_keep_their_decimal_digits() {
        assert_eq!(parse_decimal("280.45").ok(), rate_to_rational(280.45));
        assert_eq!(parse_decimal("0.0000001").ok(), rate_to_rational(1e-7));
        assert!(rate_to_rational(f64::NAN).is_none());
        assert!(rate_to_rational(f64::INFINITY).is_none());
        assert!(rate_to_rational(-1.5).is_none());
    }

    #[test]
    fn truncation_does_not_pad() {
        let one_gwei_in_ether = BigRational::new(BigInt::one(), pow10(9));
        assert_eq!("0.000000001", to_decimal_string(&one_gwei_in_ether, Some(100)));
        assert_eq!("0", to_decimal_string(&one_gwei_in_ether, Some(2)));
        assert_eq!("0.000000001", to_decimal_string(&one_gwei_in_ether, None));
    }

    #[test]
    fn truncation_does_not_round_up() {
        let value = parse_decimal("2.8045").unwrap();
        assert_eq!("2.8", to_decimal_string(&value, Some(2)));
        assert_eq!("2.804", to_decimal_string(&value, Some(3)));

        let value = parse_decimal("1.999").unwrap();
        assert_eq!("1", to_decimal_string(&value, Some(0)));
        assert_eq!("1.99", to_decimal_string(&value, Some(2)));
    }

    #[test]
    fn negative_values_keep_their_sign_unless_truncated_to_zero() {
        let value = parse_decimal("-0.5").unwrap();
        assert_eq!("-0.5", to_decimal_string(&value, None));
        assert_eq!("0", to_decimal_string(&value, Some(0)));
    }

    #[test]
    fn non_terminating_expansions_are_capped() {
        let third = BigRational::new(BigInt::one(), BigInt::from(3));
        let rendered = to_decimal_string(&third, None);
        assert_eq!(2 + MAX_EXPANSION_DIGITS as usize, rendered.len());
    }

    #[proptest]
    fn integers_render_without_fraction(value: u128) {
        let rational = BigRational::from_integer(BigInt::from(value));
        prop_assert_eq!(value.to_string(), to_decimal_string(&rational, None));
    }

    #[proptest]
    fn truncated_value_never_exceeds_exact_value(
        numerator: u64,
        #[strategy(0u32..30)] exponent: u32,
        #[strategy(0u32..30)] decimals: u32,
    ) {
        let exact = BigRational::new(BigInt::from(numerator), pow10(exponent));
        let truncated = parse_decimal(&to_decimal_string(&exact, Some(decimals))).unwrap();
        prop_assert!(truncated <= exact);
        prop_assert!(exact - truncated < BigRational::new(BigInt::one(), pow10(decimals)));
    }
}
