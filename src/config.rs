use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Rate, RateConvention};
use crate::errors::{CalculatorError, Result};
use crate::interest::AccrualPolicy;
use crate::period::RoundingPolicy;

/// earliest start year accepted unless configured otherwise
pub const DEFAULT_FLOOR_YEAR: i32 = 2018;

/// periods charged even when less than one has elapsed
pub const DEFAULT_MINIMUM_PERIODS: u32 = 1;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub accrual: AccrualPolicy,
    pub rounding: RoundingPolicy,
    pub rate_convention: RateConvention,
    /// rate used when the caller supplies none, read under `rate_convention`
    pub default_rate: Decimal,
    pub floor_year: i32,
    pub minimum_periods: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            accrual: AccrualPolicy::Compound,
            rounding: RoundingPolicy::RoundUp,
            rate_convention: RateConvention::Fraction,
            default_rate: dec!(0.03),
            floor_year: DEFAULT_FLOOR_YEAR,
            minimum_periods: DEFAULT_MINIMUM_PERIODS,
        }
    }
}

impl CalculatorConfig {
    /// receipt page: 3% per month compounded, partial months round up
    pub fn receipt_compound() -> Self {
        Self::default()
    }

    /// simple interest quoted in percent, only completed months charged
    pub fn simple_percent() -> Self {
        Self {
            accrual: AccrualPolicy::Simple,
            rounding: RoundingPolicy::Floor,
            rate_convention: RateConvention::Percent,
            default_rate: dec!(3),
            ..Self::default()
        }
    }

    /// load from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// check that the default rate fits its convention
    pub fn validate(&self) -> Result<()> {
        self.default_rate().map(|_| ()).map_err(|e| CalculatorError::InvalidConfiguration {
            message: format!("default_rate: {e}"),
        })
    }

    /// default rate converted to a per-period fraction
    pub fn default_rate(&self) -> Result<Rate> {
        Rate::from_convention(self.default_rate, self.rate_convention)
    }

    pub fn with_accrual(mut self, accrual: AccrualPolicy) -> Self {
        self.accrual = accrual;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_rate(mut self, default_rate: Decimal, convention: RateConvention) -> Self {
        self.default_rate = default_rate;
        self.rate_convention = convention;
        self
    }

    pub fn with_floor_year(mut self, floor_year: i32) -> Self {
        self.floor_year = floor_year;
        self
    }

    pub fn with_minimum_periods(mut self, minimum_periods: u32) -> Self {
        self.minimum_periods = minimum_periods;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();

        assert_eq!(config.accrual, AccrualPolicy::Compound);
        assert_eq!(config.rounding, RoundingPolicy::RoundUp);
        assert_eq!(config.floor_year, 2018);
        assert_eq!(config.minimum_periods, 1);
        assert_eq!(config.default_rate().unwrap().as_decimal(), dec!(0.03));
    }

    #[test]
    fn test_simple_percent_preset() {
        let config = CalculatorConfig::simple_percent();

        assert_eq!(config.accrual, AccrualPolicy::Simple);
        assert_eq!(config.rounding, RoundingPolicy::Floor);
        assert_eq!(config.default_rate().unwrap().as_decimal(), dec!(0.03));
    }

    #[test]
    fn test_from_json_partial() {
        let config = CalculatorConfig::from_json(
            r#"{ "accrual": "simple", "rounding": "floor", "floor_year": 2020 }"#,
        )
        .unwrap();

        assert_eq!(config.accrual, AccrualPolicy::Simple);
        assert_eq!(config.rounding, RoundingPolicy::Floor);
        assert_eq!(config.floor_year, 2020);
        assert_eq!(config.minimum_periods, DEFAULT_MINIMUM_PERIODS);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CalculatorConfig::simple_percent().with_floor_year(2015);
        let json = config.to_json_pretty().unwrap();

        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = CalculatorConfig::from_json(r#"{ "accrual": "daily" }"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_rejects_rate_outside_convention() {
        let config = CalculatorConfig::default().with_rate(dec!(3), RateConvention::Fraction);
        let err = config.validate().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }
}
