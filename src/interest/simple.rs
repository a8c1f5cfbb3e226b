use rust_decimal::Decimal;

use crate::decimal::Rate;
use crate::errors::{CalculatorError, Result};
use crate::interest::{AccrualPolicy, AccrualStrategy};

/// simple interest: the rate is applied to the original principal each period
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAccrual;

impl AccrualStrategy for SimpleAccrual {
    fn accrue(&self, principal: Decimal, rate: Rate, periods: u32) -> Result<Decimal> {
        let overflow = || CalculatorError::CalculationOverflow { periods };

        let interest = principal
            .checked_mul(rate.as_decimal())
            .and_then(|per_period| per_period.checked_mul(Decimal::from(periods)))
            .ok_or_else(overflow)?;

        principal.checked_add(interest).ok_or_else(overflow)
    }

    fn policy(&self) -> AccrualPolicy {
        AccrualPolicy::Simple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_simple_interest() {
        let rate = Rate::from_percentage(dec!(3));

        let amount = SimpleAccrual.accrue(dec!(1000), rate, 1).unwrap();
        assert_eq!(amount, dec!(1030));

        let amount = SimpleAccrual.accrue(dec!(1000), rate, 12).unwrap();
        assert_eq!(amount, dec!(1360));
    }

    #[test]
    fn test_simple_interest_is_linear() {
        let rate = Rate::from_decimal(dec!(0.015));
        let one = SimpleAccrual.accrue(dec!(2500), rate, 1).unwrap() - dec!(2500);
        let ten = SimpleAccrual.accrue(dec!(2500), rate, 10).unwrap() - dec!(2500);

        assert_eq!(ten, one * dec!(10));
    }

    #[test]
    fn test_fractional_cents_kept_until_rounding() {
        let rate = Rate::from_decimal(dec!(0.0125));
        let amount = SimpleAccrual.accrue(dec!(99.99), rate, 3).unwrap();

        assert_eq!(amount, dec!(103.739625));
        assert_eq!(Money::from_decimal(amount).as_decimal(), dec!(103.74));
    }

    #[test]
    fn test_overflow_is_reported() {
        let rate = Rate::from_decimal(Decimal::ONE);
        let err = SimpleAccrual.accrue(Decimal::MAX, rate, 2).unwrap_err();

        assert!(matches!(err, CalculatorError::CalculationOverflow { periods: 2 }));
    }
}
