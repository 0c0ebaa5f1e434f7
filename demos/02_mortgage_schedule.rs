/// mortgage schedule - PMI, prepayment, and the penalty window
use loan_engine_rs::{mortgage, Money, MortgageRequest, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 90% loan-to-value triggers mortgage insurance
    let request = MortgageRequest {
        loan_amount: Money::from_major(180_000),
        annual_rate: Rate::from_percentage(dec!(5.0)),
        term_months: 360,
        property_value: Money::from_major(200_000),
        down_payment: Money::from_major(20_000),
        monthly_prepayment: Money::from_major(500),
    };
    let estimate = mortgage::estimate(&request)?;

    println!(
        "quoted payment {} (pmi required: {}), payoff in {} months, total interest {}",
        estimate.monthly_payment,
        estimate.pmi_required,
        estimate.months_to_payoff,
        estimate.total_interest
    );

    println!("first year of the schedule:");
    for row in estimate.schedule.iter().take(12) {
        println!(
            "  month {:>3}: principal {:>9} interest {:>8} balance {:>12} penalty {}",
            row.month,
            row.principal_component,
            row.interest_component,
            row.remaining_balance,
            row.prepayment_penalty_applied
        );
    }

    let first_free = estimate
        .schedule
        .iter()
        .find(|row| !row.prepayment_penalty_applied)
        .expect("schedule is never empty");
    println!("prepayment penalty ends before month {}", first_free.month);

    Ok(())
}
