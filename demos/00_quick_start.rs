/// quick start - minimal example to get started
use loan_engine_rs::{interest, mortgage, Money, MortgageRequest, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // interest on $1,000 at 5% after 30 elapsed days (3-day grace period)
    let accrual = interest::accrue(Money::from_major(1_000), Rate::from_decimal(dec!(0.05)), 30)?;
    println!(
        "30 days at 5%: interest {} on {} chargeable days, total {}",
        accrual.accrued_interest, accrual.chargeable_days, accrual.total_amount
    );

    // price a 30-year $160,000 mortgage at 5.0%
    let estimate = mortgage::estimate(&MortgageRequest {
        loan_amount: Money::from_major(160_000),
        annual_rate: Rate::from_percentage(dec!(5.0)),
        term_months: 360,
        property_value: Money::from_major(200_000),
        down_payment: Money::from_major(40_000),
        monthly_prepayment: Money::ZERO,
    })?;
    println!(
        "monthly payment {} (pmi: {}), paid off in {} months",
        estimate.monthly_payment, estimate.pmi_required, estimate.months_to_payoff
    );

    Ok(())
}
