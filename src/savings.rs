use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::types::BonusRule;

/// fixed-installment savings scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsScheme {
    pub installment_amount: Money,
    /// number of monthly installments
    pub duration: u32,
    #[serde(default)]
    pub bonus_amount: Option<Money>,
    #[serde(default)]
    pub bonus_percentage: Option<Decimal>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

/// derived maturity figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaturityResult {
    pub total_contribution: Money,
    pub bonus_amount: Money,
    pub maturity_amount: Money,
    pub bonus_rule: BonusRule,
    pub maturity_date: Option<NaiveDate>,
}

impl SavingsScheme {
    pub fn new(installment_amount: Money, duration: u32) -> Self {
        Self {
            installment_amount,
            duration,
            bonus_amount: None,
            bonus_percentage: None,
            start_date: None,
        }
    }

    pub fn with_bonus_amount(mut self, amount: Money) -> Self {
        self.bonus_amount = Some(amount);
        self
    }

    pub fn with_bonus_percentage(mut self, pct: Decimal) -> Self {
        self.bonus_percentage = Some(pct);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// reject negative inputs before computing maturity
    pub fn validate(&self) -> Result<()> {
        if self.installment_amount.is_negative() {
            return Err(LedgerError::InvalidSavingsScheme {
                message: format!("negative installment amount {}", self.installment_amount),
            });
        }

        if let Some(amount) = self.bonus_amount {
            if amount.is_negative() {
                return Err(LedgerError::InvalidSavingsScheme {
                    message: format!("negative bonus amount {amount}"),
                });
            }
        }

        if let Some(pct) = self.bonus_percentage {
            if pct < Decimal::ZERO {
                return Err(LedgerError::InvalidSavingsScheme {
                    message: format!("negative bonus percentage {pct}"),
                });
            }
        }

        Ok(())
    }

    /// date of the final installment, when the start date is known
    pub fn maturity_date(&self) -> Option<NaiveDate> {
        self.start_date?.checked_add_months(Months::new(self.duration))
    }
}

/// total contribution, bonus and payout for a savings scheme
///
/// An explicit bonus amount wins over a bonus percentage; with neither
/// set, the bonus is one installment.
pub fn compute_maturity(scheme: &SavingsScheme) -> Result<MaturityResult> {
    let total_contribution = scheme
        .installment_amount
        .checked_mul(Decimal::from(scheme.duration))
        .ok_or_else(|| LedgerError::overflow("total contribution"))?;

    let fixed = scheme.bonus_amount.filter(|amount| amount.is_positive());
    let pct = scheme.bonus_percentage.filter(|pct| *pct > Decimal::ZERO);

    let (bonus_amount, bonus_rule) = match (fixed, pct) {
        (Some(amount), _) => (amount, BonusRule::Fixed),
        (None, Some(pct)) => {
            let amount = total_contribution
                .percentage(pct)
                .ok_or_else(|| LedgerError::overflow("bonus amount"))?;
            (amount, BonusRule::Percentage)
        }
        (None, None) => (scheme.installment_amount, BonusRule::OneInstallment),
    };

    let maturity_amount = total_contribution
        .checked_add(bonus_amount)
        .ok_or_else(|| LedgerError::overflow("maturity amount"))?;

    Ok(MaturityResult {
        total_contribution,
        bonus_amount,
        maturity_amount,
        bonus_rule,
        maturity_date: scheme.maturity_date(),
    })
}
