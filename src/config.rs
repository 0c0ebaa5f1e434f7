use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CalculationError, Result};

/// interest accrual configuration
///
/// The working context of the accrual engine. Both fields are contractual
/// constants in the default servicing setup; they are configuration so a
/// product change does not require a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualConfig {
    /// initial elapsed days during which no interest accrues
    pub grace_period_days: u32,
    /// upper bound on the elapsed day count accepted per calculation
    pub max_elapsed_days: u32,
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            grace_period_days: 3,
            max_elapsed_days: 3650,
        }
    }
}

impl AccrualConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_elapsed_days == 0 {
            return Err(CalculationError::InvalidConfiguration {
                message: "max_elapsed_days must be positive".to_string(),
            });
        }
        if self.grace_period_days >= self.max_elapsed_days {
            return Err(CalculationError::InvalidConfiguration {
                message: "grace period must be shorter than max elapsed days".to_string(),
            });
        }
        Ok(())
    }
}

/// mortgage estimation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageConfig {
    /// smallest loan amount the engine will price
    pub minimum_loan_amount: Money,
    /// shortest supported term
    pub minimum_term_months: u32,
    /// longest supported term
    pub maximum_term_months: u32,
    /// loan-to-value above which mortgage insurance is required (strict)
    pub pmi_ltv_threshold: Rate,
    /// annual mortgage insurance rate applied to the loan amount
    pub pmi_annual_rate: Rate,
    /// penalty rate charged on voluntary prepayments inside the window
    pub prepayment_penalty_rate: Rate,
    /// number of installments from schedule start during which the
    /// prepayment penalty applies
    pub penalty_window_months: u32,
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self {
            minimum_loan_amount: Money::from_major(10_000),
            minimum_term_months: 60,
            maximum_term_months: 480,
            pmi_ltv_threshold: Rate::from_decimal(dec!(0.80)),
            pmi_annual_rate: Rate::from_decimal(dec!(0.005)),
            prepayment_penalty_rate: Rate::from_decimal(dec!(0.02)),
            penalty_window_months: 24,
        }
    }
}

impl MortgageConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.minimum_loan_amount.is_positive() {
            return Err(CalculationError::InvalidConfiguration {
                message: "minimum loan amount must be positive".to_string(),
            });
        }
        if self.minimum_term_months == 0 || self.minimum_term_months > self.maximum_term_months {
            return Err(CalculationError::InvalidConfiguration {
                message: "term bounds must satisfy 1 <= minimum <= maximum".to_string(),
            });
        }
        if !self.pmi_ltv_threshold.is_positive() || self.pmi_ltv_threshold > Rate::ONE {
            return Err(CalculationError::InvalidConfiguration {
                message: "pmi ltv threshold must be in (0, 1]".to_string(),
            });
        }
        if self.pmi_annual_rate.as_decimal().is_sign_negative() {
            return Err(CalculationError::InvalidConfiguration {
                message: "pmi annual rate must not be negative".to_string(),
            });
        }
        if self.prepayment_penalty_rate.as_decimal().is_sign_negative() {
            return Err(CalculationError::InvalidConfiguration {
                message: "prepayment penalty rate must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
