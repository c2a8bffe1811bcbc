//! Exact decimal arithmetic over JSON numbers.
//!
//! JSON numbers keep their source lexeme (`serde_json` is built with
//! `arbitrary_precision`), so comparisons, integrality and `multipleOf` are
//! decided on exact decimal values rather than on binary floats.
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_cmp::NumCmp;
use serde_json::Number;
use std::cmp::Ordering;
use std::str::FromStr;

/// The exact decimal value of a JSON number.
pub(crate) fn decimal(number: &Number) -> BigDecimal {
    BigDecimal::from_str(&number.to_string()).expect("serde_json numbers are valid decimals")
}

fn pow10(exponent: u64) -> BigInt {
    let mut result = BigInt::from(1u32);
    for _ in 0..exponent {
        result *= 10u32;
    }
    result
}

fn is_integral(decimal: &BigDecimal) -> bool {
    let (mantissa, exponent) = decimal.as_bigint_and_exponent();
    exponent <= 0 || (mantissa % pow10(exponent as u64)) == BigInt::from(0u32)
}

/// Total order on two JSON numbers by exact numeric value.
pub(crate) fn cmp(left: &Number, right: &Number) -> Ordering {
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_i64()) {
        return left.cmp(&right);
    }
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_u64()) {
        return left.cmp(&right);
    }
    if let (Some(left), Some(right)) = (left.as_i64(), right.as_u64()) {
        if let Some(ordering) = left.num_cmp(right) {
            return ordering;
        }
    }
    if let (Some(left), Some(right)) = (left.as_u64(), right.as_i64()) {
        if let Some(ordering) = left.num_cmp(right) {
            return ordering;
        }
    }
    decimal(left).cmp(&decimal(right))
}

/// Two JSON numbers are equal iff their exact decimal values are equal.
#[inline]
pub(crate) fn equal(left: &Number, right: &Number) -> bool {
    cmp(left, right) == Ordering::Equal
}

/// Integer check by normalized scale, so `1.0` and `1e2` count as integers.
pub(crate) fn is_integer(number: &Number) -> bool {
    number.is_i64() || number.is_u64() || is_integral(&decimal(number))
}

pub(crate) fn is_positive(number: &Number) -> bool {
    cmp(number, &Number::from(0u32)) == Ordering::Greater
}

/// Whether `instance` divided by `by` leaves no remainder, exactly.
pub(crate) fn is_multiple_of(instance: &Number, by: &Number) -> bool {
    if let (Some(instance), Some(by)) = (instance.as_i64(), by.as_i64()) {
        if by != 0 {
            return instance % by == 0;
        }
    }
    let (mantissa, scale) = decimal(instance).as_bigint_and_exponent();
    let (by_mantissa, by_scale) = decimal(by).as_bigint_and_exponent();
    // instance / by == mantissa * 10^(by_scale - scale) / by_mantissa
    let (numerator, denominator) = if by_scale >= scale {
        (mantissa * pow10((by_scale - scale) as u64), by_mantissa)
    } else {
        (mantissa, by_mantissa * pow10((scale - by_scale) as u64))
    };
    denominator != BigInt::from(0u32) && numerator % denominator == BigInt::from(0u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;
    use std::str::FromStr;
    use test_case::test_case;

    fn number(literal: &str) -> Number {
        Number::from_str(literal).unwrap()
    }

    #[test_case("1", "1.0", true)]
    #[test_case("1", "1.000e0", true)]
    #[test_case("0.1", "0.1", true)]
    #[test_case("0.1", "0.10000000000000001", false)]
    #[test_case("1e2", "100", true)]
    #[test_case("-0", "0", true)]
    #[test_case("18446744073709551615", "18446744073709551616", false)]
    fn test_equal(left: &str, right: &str, expected: bool) {
        assert_eq!(equal(&number(left), &number(right)), expected);
        assert_eq!(equal(&number(right), &number(left)), expected);
    }

    #[test_case("1", true)]
    #[test_case("1.0", true)]
    #[test_case("1e3", true)]
    #[test_case("1.5", false)]
    #[test_case("-2.000", true)]
    #[test_case("0.30", false)]
    fn test_is_integer(literal: &str, expected: bool) {
        assert_eq!(is_integer(&number(literal)), expected);
    }

    #[test_case("0.3", "0.1", true ; "exact decimal, not binary float")]
    #[test_case("0.30000000000000004", "0.1", false)]
    #[test_case("9", "3", true)]
    #[test_case("9", "2", false)]
    #[test_case("-9", "3", true ; "negative dividend, multiple of 3")]
    #[test_case("1.1", "0.01", true)]
    #[test_case("1e3", "125", true)]
    fn test_is_multiple_of(instance: &str, by: &str, expected: bool) {
        assert_eq!(is_multiple_of(&number(instance), &number(by)), expected);
    }

    #[test]
    fn ordering() {
        assert_eq!(cmp(&number("9.9"), &number("10")), Ordering::Less);
        assert_eq!(
            cmp(&number("10000000000000000000"), &number("-1")),
            Ordering::Greater
        );
        assert!(is_positive(&number("0.0001")));
        assert!(!is_positive(&number("0")));
        assert!(!is_positive(&number("-3")));
    }
}
