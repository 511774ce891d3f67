/// quick start - accrue interest on a pawn loan
use pawn_ledger_rs::chrono::NaiveDate;
use pawn_ledger_rs::{Loan, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let loan = Loan::builder()
        .principal(Money::from_major(100_000))
        .monthly_rate(Rate::from_percentage(2))
        .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?)
        .build()?;

    let result = loan.accrual(NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("bad date")?)?;
    println!("months elapsed: {}", result.months_elapsed);
    println!("interest: {}", result.interest_accrued);
    println!("total due: {}", result.total_due);

    Ok(())
}
