use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalculatorError, Result};

/// decimal places used for amounts handed back to callers
pub const CURRENCY_DP: u32 = 2;

/// money amount at currency precision (2 decimal places, half-up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(from = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// round a raw decimal to currency precision
    pub fn from_decimal(d: Decimal) -> Self {
        Money(round_half_up(d, CURRENCY_DP))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount).round_dp(CURRENCY_DP))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

/// how a raw rate value is to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RateConvention {
    /// 0.03 means 3% per period
    #[default]
    Fraction,
    /// 3 means 3% per period
    Percent,
}

impl RateConvention {
    /// largest raw value accepted under this convention (100% per period)
    pub fn upper_bound(&self) -> Decimal {
        match self {
            RateConvention::Fraction => Decimal::ONE,
            RateConvention::Percent => Decimal::ONE_HUNDRED,
        }
    }
}

/// per-period interest rate, always held as a fraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from fraction (e.g., 0.03 for 3%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 3 for 3%)
    pub fn from_percentage(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// read a raw rate under the declared convention
    ///
    /// Negative values and values above 100% per period are rejected rather
    /// than reinterpreted.
    pub fn from_convention(raw: Decimal, convention: RateConvention) -> Result<Self> {
        if raw.is_sign_negative() && !raw.is_zero() {
            return Err(CalculatorError::invalid_amount(
                &raw.to_string(),
                "rate must not be negative",
            ));
        }
        if raw > convention.upper_bound() {
            return Err(CalculatorError::invalid_amount(
                &raw.to_string(),
                format!(
                    "rate exceeds {} under the {:?} convention",
                    convention.upper_bound(),
                    convention
                ),
            ));
        }

        Ok(match convention {
            RateConvention::Fraction => Rate::from_decimal(raw),
            RateConvention::Percent => Rate::from_percentage(raw),
        })
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

/// half-up rounding (midpoint away from zero)
pub fn round_half_up(d: Decimal, dp: u32) -> Decimal {
    d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// parse a user supplied non-negative number
///
/// Accepts plain decimals ("1000", "1000.50") and scientific notation
/// ("1e3"). Anything else, including NaN, infinities and negatives, is an
/// `InvalidAmount`.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(CalculatorError::invalid_amount(raw, "value is empty"));
    }

    // rust_decimal skips digit separators, plain numbers do not have them
    if input.contains('_') {
        return Err(CalculatorError::invalid_amount(raw, "please enter a valid number"));
    }

    let value = Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| CalculatorError::invalid_amount(raw, "please enter a valid number"))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(CalculatorError::invalid_amount(raw, "value must not be negative"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_rounds_half_up() {
        assert_eq!(Money::from_decimal(dec!(1092.727)).as_decimal(), dec!(1092.73));
        assert_eq!(Money::from_decimal(dec!(10.005)).as_decimal(), dec!(10.01));
        assert_eq!(Money::from_decimal(dec!(10.004999)).as_decimal(), dec!(10.00));
    }

    #[test]
    fn test_money_display_has_two_places() {
        assert_eq!(Money::from_major(1030).to_string(), "1030.00");
        assert_eq!(Money::from_decimal(dec!(5.5)).to_string(), "5.50");
    }

    #[test]
    fn test_money_deserializes_at_currency_precision() {
        let m: Money = serde_json::from_str(r#""1092.727""#).unwrap();
        assert_eq!(m.as_decimal(), dec!(1092.73));
        assert_eq!(serde_json::to_string(&m).unwrap(), r#""1092.73""#);
    }

    #[test]
    fn test_rate_conventions_agree() {
        let fraction = Rate::from_convention(dec!(0.03), RateConvention::Fraction).unwrap();
        let percent = Rate::from_convention(dec!(3), RateConvention::Percent).unwrap();

        assert_eq!(fraction.as_decimal(), percent.as_decimal());
        assert_eq!(percent.to_string(), "3%");
    }

    #[test]
    fn test_rate_out_of_bounds() {
        let err = Rate::from_convention(dec!(3), RateConvention::Fraction).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAmount);

        assert!(Rate::from_convention(dec!(150), RateConvention::Percent).is_err());
        assert!(Rate::from_convention(dec!(-0.01), RateConvention::Fraction).is_err());
        assert!(Rate::from_convention(dec!(100), RateConvention::Percent).is_ok());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000").unwrap(), dec!(1000));
        assert_eq!(parse_amount(" 1000.50 ").unwrap(), dec!(1000.50));
        assert_eq!(parse_amount("1e3").unwrap(), dec!(1000));
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        for raw in ["", "  ", "abc", "12,50", "NaN", "inf", "-5", "1.2.3", "1_000", "1_0e3"] {
            let err = parse_amount(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidAmount, "{raw:?}");
        }
    }
}
