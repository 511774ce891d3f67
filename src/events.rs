use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::LoanId;

/// entries recorded while replaying a loan's payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    InterestAccrued {
        loan_id: LoanId,
        from: NaiveDate,
        to: NaiveDate,
        months: u32,
        principal_base: Money,
        monthly_rate: Rate,
        amount: Money,
    },
    PaymentApplied {
        loan_id: LoanId,
        date: NaiveDate,
        amount: Money,
        to_interest: Money,
        to_principal: Money,
        excess: Money,
        reference: Option<String>,
    },
    LoanPaidInFull {
        loan_id: LoanId,
        date: NaiveDate,
    },
}

impl Event {
    pub fn date(&self) -> NaiveDate {
        match self {
            Event::InterestAccrued { to, .. } => *to,
            Event::PaymentApplied { date, .. } => *date,
            Event::LoanPaidInFull { date, .. } => *date,
        }
    }
}

/// append-only event buffer
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_emit_and_take() {
        let loan_id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut store = EventStore::new();

        store.emit(Event::LoanPaidInFull { loan_id, date });

        let taken = store.take_events();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].date(), date);
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_event_json_shape() {
        let event = Event::PaymentApplied {
            loan_id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            amount: Money::from_major(500),
            to_interest: Money::from_major(500),
            to_principal: Money::ZERO,
            excess: Money::ZERO,
            reference: Some("rcpt-17".to_string()),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["PaymentApplied"]["date"], "2024-04-01");
        assert_eq!(json["PaymentApplied"]["reference"], "rcpt-17");

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
