use crate::config::MortgageConfig;
use crate::errors::{CalculationError, Result};
use crate::mortgage::pmi::{loan_to_value, monthly_premium, pmi_required};
use crate::mortgage::schedule::{level_payment, ScheduleBuilder};
use crate::mortgage::{MortgageEstimate, MortgageRequest};

/// engine for mortgage payment estimation and schedule synthesis
///
/// Stateless over an immutable configuration; every call is an independent,
/// deterministic computation over the request alone.
#[derive(Debug, Clone, Default)]
pub struct MortgageEngine {
    config: MortgageConfig,
}

impl MortgageEngine {
    pub fn new(config: MortgageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MortgageConfig {
        &self.config
    }

    /// estimate the monthly payment and build the amortization schedule
    ///
    /// The quoted payment includes the insurance premium when loan-to-value
    /// exceeds the threshold; the schedule itself amortizes the base payment
    /// only, since the premium never reduces principal.
    pub fn estimate(&self, request: &MortgageRequest) -> Result<MortgageEstimate> {
        self.validate(request)?;

        let monthly_rate = request.annual_rate.monthly();
        let base_payment = level_payment(request.loan_amount, monthly_rate, request.term_months);

        let ltv = loan_to_value(request.loan_amount, request.property_value)?;
        let pmi = pmi_required(ltv, self.config.pmi_ltv_threshold);
        let monthly_payment = if pmi {
            base_payment + monthly_premium(request.loan_amount, self.config.pmi_annual_rate)
        } else {
            base_payment
        };

        let schedule = ScheduleBuilder::new(&self.config).build(
            request.loan_amount,
            monthly_rate,
            base_payment,
            request.term_months,
            request.monthly_prepayment,
        );

        let months_to_payoff = schedule.last().map(|row| row.month).unwrap_or(0);
        let total_interest = schedule.iter().map(|row| row.interest_component).sum();

        Ok(MortgageEstimate {
            monthly_payment,
            pmi_required: pmi,
            months_to_payoff,
            total_interest,
            schedule,
        })
    }

    fn validate(&self, request: &MortgageRequest) -> Result<()> {
        if request.loan_amount < self.config.minimum_loan_amount {
            return Err(CalculationError::LoanAmountTooLow {
                minimum: self.config.minimum_loan_amount,
                provided: request.loan_amount,
            });
        }
        if !request.annual_rate.is_positive() {
            return Err(CalculationError::InvalidRate {
                rate: request.annual_rate,
            });
        }
        if request.term_months < self.config.minimum_term_months
            || request.term_months > self.config.maximum_term_months
        {
            return Err(CalculationError::InvalidTerm {
                months: request.term_months,
                minimum: self.config.minimum_term_months,
                maximum: self.config.maximum_term_months,
            });
        }
        if request.property_value <= request.loan_amount {
            return Err(CalculationError::PropertyValueTooLow {
                property_value: request.property_value,
                loan_amount: request.loan_amount,
            });
        }
        Ok(())
    }
}
