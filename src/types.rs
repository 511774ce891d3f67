use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// loan status derived from an accrual result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// principal or interest still outstanding
    Open,
    /// nothing left to pay
    PaidInFull,
}

/// how a single payment was split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PaymentAllocation {
    pub to_interest: Money,
    pub to_principal: Money,
    /// amount left over once interest and principal are cleared
    pub excess: Money,
}

impl PaymentAllocation {
    pub fn total_applied(&self) -> Money {
        self.to_interest + self.to_principal
    }
}

/// which rule produced a savings bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusRule {
    /// absolute bonus amount from the scheme
    Fixed,
    /// percentage of total contribution
    Percentage,
    /// one free installment
    OneInstallment,
}
