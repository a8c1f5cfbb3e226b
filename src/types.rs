use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::decimal::{Money, Rate};
use crate::errors::{ErrorKind, Result};
use crate::interest::AccrualPolicy;
use crate::period::RoundingPolicy;

/// inputs of a single calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// non-negative sum the interest accrues on
    pub principal: Decimal,
    /// per-period rate as a fraction
    pub rate: Rate,
    pub start_date: CalendarDate,
}

impl CalculationInput {
    pub fn new(principal: Decimal, rate: Rate, start_date: CalendarDate) -> Self {
        Self { principal, rate, start_date }
    }
}

/// outcome of a successful calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub months: u32,
    pub final_amount: Money,
    pub interest_amount: Money,
    pub principal: Decimal,
    pub rate: Rate,
    pub start_date: CalendarDate,
    pub as_of: CalendarDate,
    pub accrual: AccrualPolicy,
    pub rounding: RoundingPolicy,
}

impl CalculationResult {
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// what a form or json front end renders for one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    pub months_passed: u32,
    pub total_due: Option<Money>,
    pub error: Option<String>,
    pub error_kind: Option<ErrorKind>,
}

impl ResultView {
    pub fn from_outcome(outcome: &Result<CalculationResult>) -> Self {
        match outcome {
            Ok(result) => ResultView {
                months_passed: result.months,
                total_due: Some(result.final_amount),
                error: None,
                error_kind: None,
            },
            Err(e) => ResultView {
                months_passed: 0,
                total_due: None,
                error: Some(e.to_string()),
                error_kind: Some(e.kind()),
            },
        }
    }

    /// http status for this view
    pub fn status_code(&self) -> u16 {
        self.error_kind.map_or(200, |kind| kind.status_code())
    }

    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
