pub mod quick;
pub mod waterfall;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};

pub use quick::{percentage_of, quick_payments, QuickPayment};
pub use waterfall::{PaymentComponent, PaymentWaterfall, WaterfallPriority};

/// balances a payment is applied against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentContext {
    pub accrued_interest: Money,
    pub outstanding_principal: Money,
}

impl PaymentContext {
    pub fn new(outstanding_principal: Money, accrued_interest: Money) -> Self {
        Self {
            accrued_interest,
            outstanding_principal,
        }
    }

    pub fn total_outstanding(&self) -> Result<Money> {
        self.accrued_interest
            .checked_add(self.outstanding_principal)
            .ok_or_else(|| LedgerError::overflow("total outstanding"))
    }

    pub fn validate_payment(&self, amount: Money) -> Result<()> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositivePayment { amount });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_context_validation() {
        let context = PaymentContext::new(Money::from_major(10_000), Money::from_major(100));

        assert!(matches!(
            context.validate_payment(Money::ZERO),
            Err(LedgerError::NonPositivePayment { .. })
        ));
        assert!(matches!(
            context.validate_payment(Money::from_major(-5)),
            Err(LedgerError::NonPositivePayment { amount }) if amount == Money::from_major(-5)
        ));
        assert!(context.validate_payment(Money::from_major(1)).is_ok());
    }

    #[test]
    fn test_total_outstanding() {
        let context = PaymentContext::new(Money::from_major(10_000), Money::from_major(250));
        assert_eq!(context.total_outstanding().unwrap(), Money::from_major(10_250));

        let huge = Money::from_str_exact("50000000000000000000000000000").unwrap();
        let context = PaymentContext::new(huge, huge);
        assert!(matches!(
            context.total_outstanding(),
            Err(LedgerError::CalculationError { .. })
        ));
    }
}
