/// savings maturity - compare the three bonus rules
use pawn_ledger_rs::chrono::NaiveDate;
use pawn_ledger_rs::{compute_maturity, Decimal, LedgerConfig, MaturityView, Money, SavingsScheme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== savings maturity ===\n");

    let start = NaiveDate::from_ymd_opt(2024, 1, 10).ok_or("bad date")?;
    let schemes = [
        SavingsScheme::new(Money::from_major(1_000), 12).with_bonus_percentage(Decimal::from(10)),
        SavingsScheme::new(Money::from_major(2_000), 11).with_bonus_amount(Money::from_major(2_500)),
        SavingsScheme::new(Money::from_major(500), 10),
    ];

    let config = LedgerConfig::default();
    for scheme in schemes {
        let scheme = scheme.with_start_date(start);
        scheme.validate()?;

        let view = MaturityView::from_result(&compute_maturity(&scheme)?, &config);
        println!("{}\n", view.to_json_pretty()?);
    }

    Ok(())
}
