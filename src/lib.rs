pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod loan;
pub mod payments;
pub mod savings;
pub mod serialization;
pub mod types;

// re-export key types
pub use calendar::{parse_date, whole_months_between};
pub use config::{AccrualConfig, LedgerConfig, PreStartPaymentPolicy};
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use interest::{
    compute_accrual, simple_interest, AccrualEngine, AccrualResult, AccrualStatement,
    InterestCalculation, InterestCalculator, WholeMonthInterest,
};
pub use loan::{Loan, LoanBuilder, Payment};
pub use payments::{percentage_of, quick_payments, PaymentContext, PaymentWaterfall, QuickPayment};
pub use savings::{compute_maturity, MaturityResult, SavingsScheme};
pub use serialization::{AccrualView, LoanRecord, MaturityView, PaymentRecord, SavingsSchemeRecord};
pub use types::{BonusRule, LoanId, LoanStatus, PaymentAllocation};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
