use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculationError, Result};

/// loan-to-value ratio
///
/// Guarded against a non-positive denominator so the helper is safe to call
/// outside the engine's validation path.
pub fn loan_to_value(loan_amount: Money, property_value: Money) -> Result<Rate> {
    if !property_value.is_positive() {
        return Err(CalculationError::PropertyValueTooLow {
            property_value,
            loan_amount,
        });
    }
    Ok(Rate::from_decimal(
        loan_amount.as_decimal() / property_value.as_decimal(),
    ))
}

/// whether mortgage insurance is required for the given ratio
///
/// The threshold is strict: a loan at exactly the threshold needs no
/// insurance.
pub fn pmi_required(ltv: Rate, threshold: Rate) -> bool {
    ltv.as_decimal() > threshold.as_decimal()
}

/// monthly mortgage insurance premium on the loan amount
///
/// One twelfth of the annual premium, rounded to 2 decimal places half-to-even
/// before it is added to the quoted payment.
pub fn monthly_premium(loan_amount: Money, annual_rate: Rate) -> Money {
    Money::from_decimal(loan_amount.as_decimal() * annual_rate.as_decimal() / Decimal::from(12))
        .round_dp(2)
}
