pub mod accrual;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;

pub use accrual::AccrualEngine;

/// interest accrual result
///
/// `accrued_interest` is rounded to 2 decimal places half-to-even;
/// `total_amount` is the caller-supplied principal plus that rounded amount,
/// with no further rounding. The remaining fields report how the figure was
/// reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestAccrual {
    pub principal: Money,
    pub accrued_interest: Money,
    pub total_amount: Money,
    pub chargeable_days: u32,
    pub daily_rate: Rate,
}

/// accrue interest under the default configuration
pub fn accrue(principal: Money, annual_rate: Rate, elapsed_days: u32) -> Result<InterestAccrual> {
    AccrualEngine::default().accrue(principal, annual_rate, elapsed_days)
}
