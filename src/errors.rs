use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid principal: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid payment amount at position {index}: {amount}")]
    InvalidPaymentAmount {
        index: usize,
        amount: Money,
    },

    #[error("payment must be positive, got {amount}")]
    NonPositivePayment {
        amount: Money,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("payment dated {payment_date} precedes loan start {start_date}")]
    PaymentBeforeStart {
        payment_date: NaiveDate,
        start_date: NaiveDate,
    },

    #[error("invalid amount: {message}")]
    InvalidAmount {
        message: String,
    },

    #[error("invalid savings scheme: {message}")]
    InvalidSavingsScheme {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LedgerError {
    pub(crate) fn overflow(what: &str) -> Self {
        LedgerError::CalculationError {
            message: format!("{what} exceeds the representable amount"),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
