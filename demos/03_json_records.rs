/// json records - convert a persistence API record and render the view
use pawn_ledger_rs::chrono::NaiveDate;
use pawn_ledger_rs::{AccrualEngine, AccrualView, LedgerConfig, Loan, LoanRecord};

const RECORD: &str = r#"{
    "principal": "75000",
    "monthlyRatePercent": "1.5",
    "startDate": "2024-03-05T09:12:00+05:30",
    "payments": [
        {"amount": 2250, "date": "2024-05-05"},
        {"amount": "20000", "date": "2024-07-20", "reference": "rcpt-0107"}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = LedgerConfig::default();
    let loan = Loan::try_from(LoanRecord::from_json(RECORD)?)?;

    let as_of = NaiveDate::from_ymd_opt(2024, 10, 1).ok_or("bad date")?;
    let statement = AccrualEngine::new(config.accrual).statement(&loan, as_of)?;

    println!("{}", AccrualView::from_statement(&statement, &config)?.to_json_pretty()?);

    Ok(())
}
