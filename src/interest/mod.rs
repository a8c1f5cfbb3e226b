pub mod compound;
pub mod simple;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::Result;

pub use compound::CompoundAccrual;
pub use simple::SimpleAccrual;

/// accrual formula applied to the elapsed periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccrualPolicy {
    /// principal * (1 + rate)^periods
    #[default]
    Compound,
    /// principal + principal * rate * periods
    Simple,
}

impl AccrualPolicy {
    /// strategy implementing this policy
    pub fn strategy(&self) -> &'static dyn AccrualStrategy {
        match self {
            AccrualPolicy::Compound => &CompoundAccrual,
            AccrualPolicy::Simple => &SimpleAccrual,
        }
    }
}

/// trait for accrual formulas
///
/// Implementations return the unrounded amount due; rounding to currency
/// precision happens once, after accrual.
pub trait AccrualStrategy: Send + Sync {
    fn accrue(&self, principal: Decimal, rate: Rate, periods: u32) -> Result<Decimal>;

    fn policy(&self) -> AccrualPolicy;
}
