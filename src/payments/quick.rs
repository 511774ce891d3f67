use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LedgerConfig;
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::interest::AccrualResult;

/// prefilled payment amount offered next to a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuickPayment {
    pub percentage: Decimal,
    pub amount: Money,
}

/// `pct` percent of `total_due`, rounded to two decimals
pub fn percentage_of(total_due: Money, pct: Decimal) -> Result<Money> {
    let amount = total_due
        .percentage(pct)
        .ok_or_else(|| LedgerError::overflow("quick payment"))?;
    Ok(amount.round_dp(2))
}

/// quick-payment amounts for each configured percentage
///
/// Nothing is offered for a loan that is already paid in full.
pub fn quick_payments(result: &AccrualResult, config: &LedgerConfig) -> Result<Vec<QuickPayment>> {
    if result.paid_in_full {
        return Ok(Vec::new());
    }

    config
        .quick_payment_percentages
        .iter()
        .map(|&percentage| {
            let amount = result
                .total_due
                .percentage(percentage)
                .ok_or_else(|| LedgerError::overflow("quick payment"))?;
            Ok(QuickPayment {
                percentage,
                amount: amount.round_dp(config.accrual.currency_scale),
            })
        })
        .collect()
}
