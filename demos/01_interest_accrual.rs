/// interest accrual - grace period and daily compounding behavior
use loan_engine_rs::{AccrualConfig, AccrualEngine, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = AccrualEngine::default();
    let principal = Money::from_major(10_000);
    let rate = Rate::from_decimal(dec!(0.06));

    println!("$10,000 at 6% annual, daily compounding:");
    for days in [0, 1, 3, 4, 7, 30, 90, 365, 3650] {
        let accrual = engine.accrue(principal, rate, days)?;
        println!(
            "  {:>4} elapsed days -> {:>4} chargeable, interest {:>10}",
            days, accrual.chargeable_days, accrual.accrued_interest
        );
    }

    // a servicing setup with a longer interest-free window
    let lenient = AccrualEngine::new(AccrualConfig {
        grace_period_days: 10,
        ..AccrualConfig::default()
    });
    let accrual = lenient.accrue(principal, rate, 30)?;
    println!(
        "10-day grace, 30 elapsed days -> interest {}",
        accrual.accrued_interest
    );

    // invalid input surfaces as a named error
    let err = engine.accrue(principal, rate, 4_000).unwrap_err();
    println!("4000 days -> {err}");

    Ok(())
}
