use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::parse_date;
use crate::config::LedgerConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::interest::{AccrualResult, AccrualStatement};
use crate::loan::{Loan, Payment};
use crate::payments::{quick_payments, QuickPayment};
use crate::savings::{MaturityResult, SavingsScheme};
use crate::types::{BonusRule, LoanId, LoanStatus};

/// loan as returned by `GET /loans/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRecord {
    #[serde(default)]
    pub id: Option<LoanId>,
    pub principal: Money,
    pub monthly_rate_percent: Decimal,
    pub start_date: String,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub amount: Money,
    pub date: String,
    #[serde(default)]
    pub reference: Option<String>,
}

impl LoanRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<LoanRecord> for Loan {
    type Error = LedgerError;

    fn try_from(record: LoanRecord) -> Result<Self> {
        let payments = record
            .payments
            .into_iter()
            .map(|p| -> Result<Payment> {
                Ok(Payment {
                    amount: p.amount,
                    date: parse_date(&p.date)?,
                    reference: p.reference,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let loan = Loan {
            id: record.id.unwrap_or_else(Uuid::new_v4),
            principal: record.principal,
            monthly_rate: Rate::from_percent(record.monthly_rate_percent),
            start_date: parse_date(&record.start_date)?,
            payments,
        };

        loan.validate()?;
        Ok(loan)
    }
}

/// savings scheme as returned by `GET /savings/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSchemeRecord {
    pub installment_amount: Money,
    pub duration: u32,
    #[serde(default)]
    pub bonus_amount: Option<Money>,
    #[serde(default)]
    pub bonus_percentage: Option<Decimal>,
    #[serde(default)]
    pub start_date: Option<String>,
}

impl SavingsSchemeRecord {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<SavingsSchemeRecord> for SavingsScheme {
    type Error = LedgerError;

    fn try_from(record: SavingsSchemeRecord) -> Result<Self> {
        let scheme = SavingsScheme {
            installment_amount: record.installment_amount,
            duration: record.duration,
            bonus_amount: record.bonus_amount,
            bonus_percentage: record.bonus_percentage,
            start_date: record.start_date.as_deref().map(parse_date).transpose()?,
        };

        scheme.validate()?;
        Ok(scheme)
    }
}

/// currency-rounded accrual figures for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccrualView {
    pub loan_id: LoanId,
    pub as_of: NaiveDate,
    pub status: LoanStatus,
    pub original_principal: Money,
    pub remaining_principal: Money,
    pub interest_accrued: Money,
    pub total_due: Money,
    pub total_paid: Money,
    pub months_elapsed: u32,
    pub paid_in_full: bool,
    pub change_due: Money,
    pub quick_payments: Vec<QuickPayment>,
}

impl AccrualView {
    pub fn from_statement(statement: &AccrualStatement, config: &LedgerConfig) -> Result<Self> {
        let scale = config.accrual.currency_scale;
        let result: &AccrualResult = &statement.result;

        Ok(AccrualView {
            loan_id: statement.loan_id,
            as_of: statement.as_of,
            status: result.status(),
            original_principal: result.original_principal.round_dp(scale),
            remaining_principal: result.remaining_principal.round_dp(scale),
            interest_accrued: result.interest_accrued.round_dp(scale),
            total_due: result.total_due.round_dp(scale),
            total_paid: result.total_paid.round_dp(scale),
            months_elapsed: result.months_elapsed,
            paid_in_full: result.paid_in_full,
            change_due: statement.excess_paid.round_dp(scale),
            quick_payments: quick_payments(result, config)?,
        })
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// currency-rounded maturity figures for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityView {
    pub total_contribution: Money,
    pub bonus_amount: Money,
    pub maturity_amount: Money,
    pub bonus_rule: BonusRule,
    pub maturity_date: Option<NaiveDate>,
}

impl MaturityView {
    pub fn from_result(result: &MaturityResult, config: &LedgerConfig) -> Self {
        let scale = config.accrual.currency_scale;
        MaturityView {
            total_contribution: result.total_contribution.round_dp(scale),
            bonus_amount: result.bonus_amount.round_dp(scale),
            maturity_amount: result.maturity_amount.round_dp(scale),
            bonus_rule: result.bonus_rule,
            maturity_date: result.maturity_date,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
