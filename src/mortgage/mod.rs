pub mod estimate;
pub mod pmi;
pub mod schedule;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;

pub use estimate::MortgageEngine;
pub use pmi::{loan_to_value, monthly_premium, pmi_required};
pub use schedule::{level_payment, Installment, ScheduleBuilder};

/// mortgage estimation request
///
/// `down_payment` is carried for reporting only; the insurance decision is
/// driven by the loan-to-value ratio alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageRequest {
    pub loan_amount: Money,
    /// annual rate as a fraction; build from a quoted percentage with
    /// [`Rate::from_percentage`]
    pub annual_rate: Rate,
    pub term_months: u32,
    pub property_value: Money,
    pub down_payment: Money,
    /// voluntary extra principal paid each month, zero when absent
    pub monthly_prepayment: Money,
}

/// mortgage estimation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageEstimate {
    /// quoted monthly payment, insurance premium included when required
    pub monthly_payment: Money,
    pub pmi_required: bool,
    /// month number of the final installment
    pub months_to_payoff: u32,
    /// sum of the emitted interest components
    pub total_interest: Money,
    /// chronological, 1-indexed, never longer than the term
    pub schedule: Vec<Installment>,
}

/// estimate a mortgage under the default configuration
pub fn estimate(request: &MortgageRequest) -> Result<MortgageEstimate> {
    MortgageEngine::default().estimate(request)
}
