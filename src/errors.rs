use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date::CalendarDate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("invalid date format: '{input}'. Please use formats like '3.2.21' or '03-02-2021'")]
    InvalidDateFormat {
        input: String,
    },

    #[error("invalid amount '{input}': {reason}")]
    InvalidAmount {
        input: String,
        reason: String,
    },

    #[error("date {start} is in the future (today is {now})")]
    FutureDateNotAllowed {
        start: CalendarDate,
        now: CalendarDate,
    },

    #[error("date year {year} is before the earliest allowed year {floor_year}")]
    DateTooOld {
        year: i32,
        floor_year: i32,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation overflow after {periods} periods")]
    CalculationOverflow {
        periods: u32,
    },
}

/// tag of a calculator error, stable across message changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidDateFormat,
    InvalidAmount,
    FutureDateNotAllowed,
    DateTooOld,
    InvalidConfiguration,
    CalculationOverflow,
}

impl ErrorKind {
    /// true when the caller supplied bad input, as opposed to a fault on our side
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidDateFormat
                | ErrorKind::InvalidAmount
                | ErrorKind::FutureDateNotAllowed
                | ErrorKind::DateTooOld
        )
    }

    /// http status a transport layer should answer with
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}

impl CalculatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculatorError::InvalidDateFormat { .. } => ErrorKind::InvalidDateFormat,
            CalculatorError::InvalidAmount { .. } => ErrorKind::InvalidAmount,
            CalculatorError::FutureDateNotAllowed { .. } => ErrorKind::FutureDateNotAllowed,
            CalculatorError::DateTooOld { .. } => ErrorKind::DateTooOld,
            CalculatorError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            CalculatorError::CalculationOverflow { .. } => ErrorKind::CalculationOverflow,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.kind().is_client_error()
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub(crate) fn invalid_amount(input: &str, reason: impl Into<String>) -> Self {
        CalculatorError::InvalidAmount {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
