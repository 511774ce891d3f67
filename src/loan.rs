use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::interest::{AccrualEngine, AccrualResult};
use crate::types::LoanId;

/// a payment recorded against a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default)]
    pub reference: Option<String>,
}

impl Payment {
    pub fn new(amount: Money, date: NaiveDate) -> Self {
        Self {
            amount,
            date,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// snapshot of a pawn loan as held by the persistence layer
///
/// Payments are kept in insertion order; the accrual engine orders them by
/// date itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub principal: Money,
    pub monthly_rate: Rate,
    pub start_date: NaiveDate,
    pub payments: Vec<Payment>,
}

impl Loan {
    pub fn new(principal: Money, monthly_rate: Rate, start_date: NaiveDate) -> Result<Self> {
        let loan = Self {
            id: Uuid::new_v4(),
            principal,
            monthly_rate,
            start_date,
            payments: Vec::new(),
        };
        loan.validate()?;
        Ok(loan)
    }

    pub fn builder() -> LoanBuilder {
        LoanBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.principal.is_negative() {
            return Err(LedgerError::InvalidPrincipal {
                amount: self.principal,
            });
        }

        if self.monthly_rate.is_negative() {
            return Err(LedgerError::InvalidInterestRate {
                rate: self.monthly_rate,
            });
        }

        for (index, payment) in self.payments.iter().enumerate() {
            if !payment.amount.is_positive() {
                return Err(LedgerError::InvalidPaymentAmount {
                    index,
                    amount: payment.amount,
                });
            }
        }

        Ok(())
    }

    /// copy of this loan with one more payment appended
    pub fn with_payment(&self, amount: Money, date: NaiveDate) -> Result<Self> {
        let mut next = self.clone();
        next.payments.push(Payment::new(amount, date));
        next.validate()?;
        Ok(next)
    }

    /// accrual figures as of a date using the default engine
    pub fn accrual(&self, as_of: NaiveDate) -> Result<AccrualResult> {
        AccrualEngine::default().compute_accrual(self, as_of)
    }

    /// accrual figures as of the provider's current date
    pub fn accrual_now(&self, time_provider: &SafeTimeProvider) -> Result<AccrualResult> {
        AccrualEngine::default().compute_accrual_now(self, time_provider)
    }
}

/// builder for loan snapshots
#[derive(Debug, Clone, Default)]
pub struct LoanBuilder {
    id: Option<LoanId>,
    principal: Option<Money>,
    monthly_rate: Option<Rate>,
    start_date: Option<NaiveDate>,
    payments: Vec<Payment>,
}

impl LoanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: LoanId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn monthly_rate(mut self, rate: Rate) -> Self {
        self.monthly_rate = Some(rate);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn payment(mut self, amount: Money, date: NaiveDate) -> Self {
        self.payments.push(Payment::new(amount, date));
        self
    }

    pub fn payments(mut self, payments: impl IntoIterator<Item = Payment>) -> Self {
        self.payments.extend(payments);
        self
    }

    /// build, defaulting the start date to today's system date
    pub fn build(self) -> Result<Loan> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.build_with_time(&time)
    }

    /// build, defaulting the start date to the provider's current date
    pub fn build_with_time(self, time_provider: &SafeTimeProvider) -> Result<Loan> {
        let principal = self.principal.ok_or(LedgerError::InvalidAmount {
            message: "principal is required".to_string(),
        })?;

        let loan = Loan {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            principal,
            monthly_rate: self.monthly_rate.unwrap_or(Rate::ZERO),
            start_date: self
                .start_date
                .unwrap_or_else(|| time_provider.now().date_naive()),
            payments: self.payments,
        };

        loan.validate()?;
        Ok(loan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_builder_defaults_start_to_provider_date() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(),
        ));

        let loan = Loan::builder()
            .principal(Money::from_major(25_000))
            .monthly_rate(Rate::from_percentage(3))
            .build_with_time(&time)
            .unwrap();

        assert_eq!(loan.start_date, date(2024, 6, 15));
        assert!(loan.payments.is_empty());
    }

    #[test]
    fn test_builder_requires_principal() {
        let result = Loan::builder().start_date(date(2024, 1, 1)).build();
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }

    #[test]
    fn test_negative_principal_rejected() {
        let result = Loan::new(Money::from_major(-1), Rate::from_percentage(2), date(2024, 1, 1));
        assert!(matches!(result, Err(LedgerError::InvalidPrincipal { .. })));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = Loan::new(
            Money::from_major(1_000),
            Rate::from_percent(rust_decimal_macros::dec!(-1)),
            date(2024, 1, 1),
        );
        assert!(matches!(result, Err(LedgerError::InvalidInterestRate { .. })));
    }

    #[test]
    fn test_non_positive_payment_rejected_with_index() {
        let result = Loan::builder()
            .principal(Money::from_major(1_000))
            .start_date(date(2024, 1, 1))
            .payment(Money::from_major(100), date(2024, 2, 1))
            .payment(Money::ZERO, date(2024, 3, 1))
            .build();

        match result {
            Err(LedgerError::InvalidPaymentAmount { index, amount }) => {
                assert_eq!(index, 1);
                assert_eq!(amount, Money::ZERO);
            }
            other => panic!("expected invalid payment, got {other:?}"),
        }
    }

    #[test]
    fn test_with_payment_leaves_original_untouched() {
        let loan = Loan::new(Money::from_major(10_000), Rate::from_percentage(2), date(2024, 1, 1)).unwrap();
        let next = loan.with_payment(Money::from_major(500), date(2024, 2, 1)).unwrap();

        assert!(loan.payments.is_empty());
        assert_eq!(next.payments.len(), 1);
        assert_eq!(next.id, loan.id);
        assert_eq!(next.payments[0].amount, Money::from_major(500));

        assert!(loan.with_payment(Money::from_major(-5), date(2024, 2, 1)).is_err());
    }

    #[test]
    fn test_accrual_now_uses_provider_date() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let control = time.test_control().unwrap();

        let loan = Loan::builder()
            .principal(Money::from_major(100_000))
            .monthly_rate(Rate::from_percentage(2))
            .build_with_time(&time)
            .unwrap();

        control.advance(chrono::Duration::days(91)); // 2024-04-01

        let result = loan.accrual_now(&time).unwrap();
        assert_eq!(result.months_elapsed, 3);
        assert_eq!(result.interest_accrued, Money::from_major(6_000));
    }
}
