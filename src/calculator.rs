use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;

use crate::config::{CalculatorConfig, DEFAULT_FLOOR_YEAR, DEFAULT_MINIMUM_PERIODS};
use crate::date::{normalize_date, CalendarDate};
use crate::decimal::{parse_amount, Money, Rate, RateConvention};
use crate::errors::{CalculatorError, Result};
use crate::interest::AccrualPolicy;
use crate::period::{months_elapsed, RoundingPolicy};
use crate::types::{CalculationInput, CalculationResult};

/// calculate interest due with explicit policies
///
/// `rate` is a per-period fraction. The floor year and minimum period count
/// take their defaults; use `InterestCalculator` to configure them.
pub fn calculate(
    principal: Decimal,
    rate: Rate,
    start: CalendarDate,
    now: CalendarDate,
    accrual: AccrualPolicy,
    rounding: RoundingPolicy,
) -> Result<CalculationResult> {
    let config = CalculatorConfig {
        accrual,
        rounding,
        floor_year: DEFAULT_FLOOR_YEAR,
        minimum_periods: DEFAULT_MINIMUM_PERIODS,
        ..CalculatorConfig::default()
    };

    InterestCalculator { config }.calculate(&CalculationInput::new(principal, rate, start), now)
}

/// configured interest calculator
#[derive(Debug, Clone, Default)]
pub struct InterestCalculator {
    config: CalculatorConfig,
}

impl InterestCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// calculate the amount due on `input` as of `now`
    pub fn calculate(&self, input: &CalculationInput, now: CalendarDate) -> Result<CalculationResult> {
        self.validate(input, now)?;

        let months = months_elapsed(
            input.start_date,
            now,
            self.config.rounding,
            self.config.minimum_periods,
        );
        tracing::debug!(
            start = %input.start_date,
            now = %now,
            rounding = ?self.config.rounding,
            months,
            "computed elapsed periods"
        );

        let strategy = self.config.accrual.strategy();
        let raw_amount = strategy.accrue(input.principal, input.rate, months)?;
        let final_amount = Money::from_decimal(raw_amount);
        let interest_amount = Money::from_decimal(raw_amount - input.principal);

        tracing::info!(
            principal = %input.principal,
            rate = %input.rate,
            months,
            accrual = ?strategy.policy(),
            final_amount = %final_amount,
            "interest calculated"
        );

        Ok(CalculationResult {
            months,
            final_amount,
            interest_amount,
            principal: input.principal,
            rate: input.rate,
            start_date: input.start_date,
            as_of: now,
            accrual: strategy.policy(),
            rounding: self.config.rounding,
        })
    }

    /// parse raw form fields and calculate against the clock
    ///
    /// The clock is read once. A missing or blank rate falls back to the
    /// configured default; a supplied rate is read under the configured
    /// convention.
    pub fn calculate_raw(
        &self,
        raw_date: &str,
        raw_amount: &str,
        raw_rate: Option<&str>,
        time_provider: &SafeTimeProvider,
    ) -> Result<CalculationResult> {
        let now = CalendarDate::today(time_provider);

        let outcome = self
            .parse_input(raw_date, raw_amount, raw_rate)
            .and_then(|input| self.calculate(&input, now));
        if let Err(e) = &outcome {
            tracing::warn!(
                date = raw_date,
                amount = raw_amount,
                kind = ?e.kind(),
                "calculation rejected: {e}"
            );
        }
        outcome
    }

    fn parse_input(
        &self,
        raw_date: &str,
        raw_amount: &str,
        raw_rate: Option<&str>,
    ) -> Result<CalculationInput> {
        let start_date = normalize_date(raw_date)?;
        let principal = parse_amount(raw_amount)?;
        let rate = match raw_rate.map(str::trim).filter(|r| !r.is_empty()) {
            Some(raw) => Rate::from_convention(parse_amount(raw)?, self.config.rate_convention)?,
            None => self.config.default_rate()?,
        };

        Ok(CalculationInput::new(principal, rate, start_date))
    }

    // amount first, then future start, then floor year
    fn validate(&self, input: &CalculationInput, now: CalendarDate) -> Result<()> {
        if input.principal.is_sign_negative() && !input.principal.is_zero() {
            return Err(CalculatorError::invalid_amount(
                &input.principal.to_string(),
                "value must not be negative",
            ));
        }
        // rates reach the calculator as fractions, whatever convention they were entered in
        Rate::from_convention(input.rate.as_decimal(), RateConvention::Fraction)?;

        if input.start_date > now {
            return Err(CalculatorError::FutureDateNotAllowed {
                start: input.start_date,
                now,
            });
        }

        if input.start_date.year() < self.config.floor_year {
            return Err(CalculatorError::DateTooOld {
                year: input.start_date.year(),
                floor_year: self.config.floor_year,
            });
        }

        Ok(())
    }
}
