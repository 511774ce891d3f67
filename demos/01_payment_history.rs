/// payment history - replay out-of-order payments and print the ledger
use pawn_ledger_rs::chrono::NaiveDate;
use pawn_ledger_rs::{AccrualEngine, Event, Loan, Money, Payment, Rate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== payment history ===\n");

    // recorded in entry order, not date order
    let loan = Loan::builder()
        .principal(Money::from_major(60_000))
        .monthly_rate(Rate::from_percentage(3))
        .start_date(date(2024, 2, 10))
        .payments([
            Payment::new(Money::from_major(10_000), date(2024, 6, 12)).with_reference("rcpt-0031"),
            Payment::new(Money::from_major(3_600), date(2024, 4, 10)).with_reference("rcpt-0019"),
        ])
        .build()?;

    let statement = AccrualEngine::default().statement(&loan, date(2024, 9, 10))?;

    for entry in &statement.entries {
        match entry {
            Event::InterestAccrued { from, to, months, principal_base, amount, .. } => {
                println!("{from} -> {to}: {months} month(s) on {principal_base}, interest {amount}");
            }
            Event::PaymentApplied { date, amount, to_interest, to_principal, reference, .. } => {
                println!(
                    "{date}: paid {amount} ({}) -> interest {to_interest}, principal {to_principal}",
                    reference.as_deref().unwrap_or("-")
                );
            }
            Event::LoanPaidInFull { date, .. } => println!("{date}: paid in full"),
        }
    }

    println!("\nremaining principal: {}", statement.result.remaining_principal);
    println!("interest accrued:    {}", statement.result.interest_accrued);
    println!("total due:           {}", statement.result.total_due);

    Ok(())
}
