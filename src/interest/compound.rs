use rust_decimal::Decimal;

use crate::decimal::Rate;
use crate::errors::{CalculatorError, Result};
use crate::interest::{AccrualPolicy, AccrualStrategy};

/// compound interest: each period's interest is added to the base of the next
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundAccrual;

impl CompoundAccrual {
    /// (1 + rate)^periods, or None on overflow
    pub fn growth_factor(rate: Rate, periods: u32) -> Option<Decimal> {
        checked_powu(Decimal::ONE + rate.as_decimal(), periods)
    }
}

impl AccrualStrategy for CompoundAccrual {
    fn accrue(&self, principal: Decimal, rate: Rate, periods: u32) -> Result<Decimal> {
        Self::growth_factor(rate, periods)
            .and_then(|factor| principal.checked_mul(factor))
            .ok_or(CalculatorError::CalculationOverflow { periods })
    }

    fn policy(&self) -> AccrualPolicy {
        AccrualPolicy::Compound
    }
}

// exponentiation by squaring
fn checked_powu(base: Decimal, exp: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut base = base;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base)?;
        }
    }

    Some(result)
}
