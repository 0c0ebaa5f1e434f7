/// json results - lossless transport of requests and estimates
use loan_engine_rs::{mortgage, MortgageRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // requests deserialize from transport payloads; decimals travel as
    // strings so no precision is lost on the wire
    let payload = r#"{
        "loan_amount": "160000",
        "annual_rate": "0.05",
        "term_months": 360,
        "property_value": "200000",
        "down_payment": "40000",
        "monthly_prepayment": "0"
    }"#;

    let request: MortgageRequest = serde_json::from_str(payload)?;
    let estimate = mortgage::estimate(&request)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "monthly_payment": estimate.monthly_payment,
            "pmi_required": estimate.pmi_required,
            "months_to_payoff": estimate.months_to_payoff,
            "first_installment": estimate.schedule.first(),
        }))?
    );

    Ok(())
}
