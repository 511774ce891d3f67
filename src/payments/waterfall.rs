use crate::decimal::Money;
use crate::errors::Result;
use crate::types::PaymentAllocation;

use super::PaymentContext;

/// waterfall priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WaterfallPriority {
    First = 1,
    Second = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentComponent {
    Interest,
    Principal,
}

/// payment waterfall configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentWaterfall {
    pub interest_priority: WaterfallPriority,
    pub principal_priority: WaterfallPriority,
}

impl Default for PaymentWaterfall {
    fn default() -> Self {
        Self::interest_first()
    }
}

impl PaymentWaterfall {
    /// pawn servicing order: outstanding interest, then principal
    pub fn interest_first() -> Self {
        Self {
            interest_priority: WaterfallPriority::First,
            principal_priority: WaterfallPriority::Second,
        }
    }

    /// apply a payment to the context balances in priority order
    ///
    /// Balances never go below zero; whatever cannot be applied is
    /// reported as `excess`.
    pub fn apply(&self, amount: Money, context: &mut PaymentContext) -> Result<PaymentAllocation> {
        context.validate_payment(amount)?;

        let mut priorities = [
            (self.interest_priority, PaymentComponent::Interest),
            (self.principal_priority, PaymentComponent::Principal),
        ];
        priorities.sort_by_key(|&(priority, _)| priority);

        let mut remaining = amount;
        let mut allocation = PaymentAllocation::default();

        for (_, component) in priorities {
            remaining = Self::apply_to_component(component, remaining, context, &mut allocation);
            if remaining.is_zero() {
                break;
            }
        }

        allocation.excess = remaining;

        log::trace!(
            "allocated payment {}: interest {}, principal {}, excess {}",
            amount,
            allocation.to_interest,
            allocation.to_principal,
            allocation.excess
        );

        Ok(allocation)
    }

    fn apply_to_component(
        component: PaymentComponent,
        available: Money,
        context: &mut PaymentContext,
        allocation: &mut PaymentAllocation,
    ) -> Money {
        let (balance, applied_field) = match component {
            PaymentComponent::Interest => (&mut context.accrued_interest, &mut allocation.to_interest),
            PaymentComponent::Principal => (&mut context.outstanding_principal, &mut allocation.to_principal),
        };

        let payment = available.min(*balance).max(Money::ZERO);
        *balance -= payment;
        *applied_field = payment;

        available - payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;

    fn context(principal: i64, interest: i64) -> PaymentContext {
        PaymentContext::new(Money::from_major(principal), Money::from_major(interest))
    }

    #[test]
    fn test_payment_below_interest() {
        let mut ctx = context(100_000, 6_000);
        let allocation = PaymentWaterfall::interest_first()
            .apply(Money::from_major(2_500), &mut ctx)
            .unwrap();

        assert_eq!(allocation.to_interest, Money::from_major(2_500));
        assert_eq!(allocation.to_principal, Money::ZERO);
        assert_eq!(ctx.accrued_interest, Money::from_major(3_500));
        assert_eq!(ctx.outstanding_principal, Money::from_major(100_000));
    }

    #[test]
    fn test_payment_exactly_interest() {
        let mut ctx = context(100_000, 6_000);
        let allocation = PaymentWaterfall::default()
            .apply(Money::from_major(6_000), &mut ctx)
            .unwrap();

        assert_eq!(allocation.to_interest, Money::from_major(6_000));
        assert_eq!(allocation.to_principal, Money::ZERO);
        assert!(ctx.accrued_interest.is_zero());
    }

    #[test]
    fn test_payment_spills_into_principal() {
        let mut ctx = context(100_000, 6_000);
        let allocation = PaymentWaterfall::interest_first()
            .apply(Money::from_major(56_000), &mut ctx)
            .unwrap();

        assert_eq!(allocation.to_interest, Money::from_major(6_000));
        assert_eq!(allocation.to_principal, Money::from_major(50_000));
        assert_eq!(allocation.total_applied(), Money::from_major(56_000));
        assert_eq!(ctx.outstanding_principal, Money::from_major(50_000));
    }

    #[test]
    fn test_overpayment_reports_excess() {
        let mut ctx = context(1_000, 20);
        let allocation = PaymentWaterfall::interest_first()
            .apply(Money::from_major(1_500), &mut ctx)
            .unwrap();

        assert_eq!(allocation.to_interest, Money::from_major(20));
        assert_eq!(allocation.to_principal, Money::from_major(1_000));
        assert_eq!(allocation.excess, Money::from_major(480));
        assert!(ctx.total_outstanding().unwrap().is_zero());
    }

    #[test]
    fn test_rejects_non_positive_payment() {
        let mut ctx = context(1_000, 0);
        let result = PaymentWaterfall::interest_first().apply(Money::ZERO, &mut ctx);
        assert!(matches!(result, Err(LedgerError::NonPositivePayment { .. })));
        assert_eq!(ctx, context(1_000, 0));
    }
}
