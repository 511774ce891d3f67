/// time control - drive "now" from a test clock
use pawn_ledger_rs::chrono::{Duration, TimeZone, Utc};
use pawn_ledger_rs::{Loan, Money, Rate, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== time control ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    ));
    let control = time.test_control().unwrap();

    let loan = Loan::builder()
        .principal(Money::from_major(40_000))
        .monthly_rate(Rate::from_percentage(2))
        .build_with_time(&time)?;

    for _ in 0..4 {
        let result = loan.accrual_now(&time)?;
        println!(
            "{}: {} month(s), interest {}, due {}",
            time.now().date_naive(),
            result.months_elapsed,
            result.interest_accrued,
            result.total_due
        );
        control.advance(Duration::days(20));
    }

    Ok(())
}
