pub mod calculator;
pub mod config;
pub mod date;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod period;
pub mod types;

// re-export key types
pub use calculator::{calculate, InterestCalculator};
pub use config::CalculatorConfig;
pub use date::{normalize_date, CalendarDate, DateFormat};
pub use decimal::{parse_amount, Money, Rate, RateConvention};
pub use errors::{CalculatorError, ErrorKind, Result};
pub use interest::{AccrualPolicy, AccrualStrategy, CompoundAccrual, SimpleAccrual};
pub use period::{months_elapsed, RoundingPolicy};
pub use types::{CalculationInput, CalculationResult, ResultView};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
