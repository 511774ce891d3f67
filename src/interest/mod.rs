pub mod accrual;

use chrono::NaiveDate;

use crate::calendar::whole_months_between;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};

pub use accrual::{compute_accrual, AccrualEngine, AccrualResult, AccrualStatement};

/// interest calculation result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestCalculation {
    pub interest_amount: Money,
    pub principal_base: Money,
    pub monthly_rate: Rate,
    pub months: u32,
}

/// trait for interest calculations over a date span
pub trait InterestCalculator {
    fn calculate_interest(
        &self,
        principal: Money,
        monthly_rate: Rate,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<InterestCalculation>;
}

/// non-compounding interest for whole months at a monthly rate
pub fn simple_interest(principal: Money, monthly_rate: Rate, months: u32) -> Result<InterestCalculation> {
    let interest_amount = principal
        .apply_periodic_rate(monthly_rate, months)
        .ok_or_else(|| LedgerError::overflow("interest"))?;

    Ok(InterestCalculation {
        interest_amount,
        principal_base: principal,
        monthly_rate,
        months,
    })
}

/// simple interest over the whole calendar months between two dates
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeMonthInterest;

impl InterestCalculator for WholeMonthInterest {
    fn calculate_interest(
        &self,
        principal: Money,
        monthly_rate: Rate,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<InterestCalculation> {
        simple_interest(principal, monthly_rate, whole_months_between(from, to))
    }
}
