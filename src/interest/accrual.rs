use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::calendar::whole_months_between;
use crate::config::{AccrualConfig, PreStartPaymentPolicy};
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::interest::{InterestCalculator, WholeMonthInterest};
use crate::loan::{Loan, Payment};
use crate::payments::{PaymentContext, PaymentWaterfall};
use crate::types::{LoanId, LoanStatus};

/// derived loan figures as of a date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccrualResult {
    pub original_principal: Money,
    pub remaining_principal: Money,
    pub interest_accrued: Money,
    pub total_due: Money,
    pub total_paid: Money,
    /// whole months from loan start to the as-of date, for display
    pub months_elapsed: u32,
    pub paid_in_full: bool,
}

impl AccrualResult {
    pub fn status(&self) -> LoanStatus {
        if self.paid_in_full {
            LoanStatus::PaidInFull
        } else {
            LoanStatus::Open
        }
    }
}

/// accrual result together with the replayed ledger entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualStatement {
    pub loan_id: LoanId,
    pub as_of: NaiveDate,
    pub result: AccrualResult,
    pub entries: Vec<Event>,
    pub total_interest_paid: Money,
    pub total_principal_paid: Money,
    /// paid beyond what was owed; returned to the customer as change
    pub excess_paid: Money,
}

/// replays a loan's payments against a whole-month simple-interest schedule
#[derive(Debug, Clone, Default)]
pub struct AccrualEngine {
    config: AccrualConfig,
    waterfall: PaymentWaterfall,
    calculator: WholeMonthInterest,
}

impl AccrualEngine {
    pub fn new(config: AccrualConfig) -> Self {
        Self {
            config,
            waterfall: PaymentWaterfall::interest_first(),
            calculator: WholeMonthInterest,
        }
    }

    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    pub fn compute_accrual(&self, loan: &Loan, as_of: NaiveDate) -> Result<AccrualResult> {
        Ok(self.statement(loan, as_of)?.result)
    }

    /// accrual as of the provider's current date
    pub fn compute_accrual_now(
        &self,
        loan: &Loan,
        time_provider: &SafeTimeProvider,
    ) -> Result<AccrualResult> {
        self.compute_accrual(loan, time_provider.now().date_naive())
    }

    /// full replay of the loan up to `as_of`
    pub fn statement(&self, loan: &Loan, as_of: NaiveDate) -> Result<AccrualStatement> {
        loan.validate()?;

        // stable: same-day payments keep their recorded order
        let mut ordered: Vec<(usize, &Payment)> = loan.payments.iter().enumerate().collect();
        ordered.sort_by_key(|(_, payment)| payment.date);

        let mut events = EventStore::new();
        let mut context = PaymentContext::new(loan.principal, Money::ZERO);
        let mut cursor = loan.start_date;

        let mut total_paid = Money::ZERO;
        let mut total_interest_paid = Money::ZERO;
        let mut total_principal_paid = Money::ZERO;
        let mut excess_paid = Money::ZERO;

        for (index, payment) in ordered {
            if payment.date < loan.start_date {
                match self.config.pre_start_payments {
                    PreStartPaymentPolicy::Reject => {
                        return Err(LedgerError::PaymentBeforeStart {
                            payment_date: payment.date,
                            start_date: loan.start_date,
                        });
                    }
                    PreStartPaymentPolicy::ZeroElapsed => {
                        log::warn!(
                            "loan {}: payment {} dated {} precedes start {}, applying with no elapsed months",
                            loan.id,
                            index,
                            payment.date,
                            loan.start_date
                        );
                    }
                }
            }

            self.accrue_segment(loan, &mut context, cursor, payment.date, &mut events)?;

            // amounts were checked positive by `loan.validate()`
            let outstanding_before = context.total_outstanding()?;
            let allocation = self.waterfall.apply(payment.amount, &mut context)?;

            total_paid = total_paid
                .checked_add(payment.amount)
                .ok_or_else(|| LedgerError::overflow("total paid"))?;
            // each component is bounded by `total_paid`
            total_interest_paid += allocation.to_interest;
            total_principal_paid += allocation.to_principal;
            excess_paid += allocation.excess;

            events.emit(Event::PaymentApplied {
                loan_id: loan.id,
                date: payment.date,
                amount: payment.amount,
                to_interest: allocation.to_interest,
                to_principal: allocation.to_principal,
                excess: allocation.excess,
                reference: payment.reference.clone(),
            });

            if outstanding_before.is_positive() && context.total_outstanding()?.is_zero() {
                events.emit(Event::LoanPaidInFull {
                    loan_id: loan.id,
                    date: payment.date,
                });
            }

            cursor = cursor.max(payment.date);
        }

        if context.outstanding_principal.is_positive() {
            self.accrue_segment(loan, &mut context, cursor, as_of, &mut events)?;
        }

        let total_due = context.total_outstanding()?;
        let result = AccrualResult {
            original_principal: loan.principal,
            remaining_principal: context.outstanding_principal,
            interest_accrued: context.accrued_interest,
            total_due,
            total_paid,
            months_elapsed: whole_months_between(loan.start_date, as_of),
            paid_in_full: !total_due.is_positive(),
        };

        log::debug!(
            "loan {} as of {}: principal {}, interest {}, due {}",
            loan.id,
            as_of,
            result.remaining_principal,
            result.interest_accrued,
            result.total_due
        );

        Ok(AccrualStatement {
            loan_id: loan.id,
            as_of,
            result,
            entries: events.take_events(),
            total_interest_paid,
            total_principal_paid,
            excess_paid,
        })
    }

    fn accrue_segment(
        &self,
        loan: &Loan,
        context: &mut PaymentContext,
        from: NaiveDate,
        to: NaiveDate,
        events: &mut EventStore,
    ) -> Result<()> {
        let calc = self.calculator.calculate_interest(
            context.outstanding_principal,
            loan.monthly_rate,
            from,
            to,
        )?;

        if calc.months == 0 || calc.principal_base.is_zero() {
            return Ok(());
        }

        context.accrued_interest = context
            .accrued_interest
            .checked_add(calc.interest_amount)
            .ok_or_else(|| LedgerError::overflow("accrued interest"))?;

        log::debug!(
            "loan {}: {} months {} to {} on {} accrued {}",
            loan.id,
            calc.months,
            from,
            to,
            calc.principal_base,
            calc.interest_amount
        );

        events.emit(Event::InterestAccrued {
            loan_id: loan.id,
            from,
            to,
            months: calc.months,
            principal_base: calc.principal_base,
            monthly_rate: calc.monthly_rate,
            amount: calc.interest_amount,
        });

        Ok(())
    }
}

/// accrual figures for `loan` as of `as_of` with the default configuration
pub fn compute_accrual(loan: &Loan, as_of: NaiveDate) -> Result<AccrualResult> {
    AccrualEngine::default().compute_accrual(loan, as_of)
}
