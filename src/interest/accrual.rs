use rust_decimal::Decimal;

use crate::config::AccrualConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculationError, Result};
use crate::interest::InterestAccrual;

/// engine for accruing daily-compounded interest with a grace period
///
/// Stateless over an immutable configuration; a single engine value can be
/// shared by any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccrualEngine {
    config: AccrualConfig,
}

impl AccrualEngine {
    pub fn new(config: AccrualConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    /// accrue interest on `principal` at `annual_rate` over `elapsed_days`
    ///
    /// Interest compounds daily at `annual_rate / 365` on the days beyond the
    /// grace period. The accrued amount is rounded to 2 decimal places
    /// half-to-even; the factor itself is carried at full working precision.
    pub fn accrue(
        &self,
        principal: Money,
        annual_rate: Rate,
        elapsed_days: u32,
    ) -> Result<InterestAccrual> {
        self.validate(principal, annual_rate, elapsed_days)?;

        let daily_rate = annual_rate.daily();
        let chargeable_days = elapsed_days.saturating_sub(self.config.grace_period_days);

        // covers elapsed_days == 0 and every day inside the grace period
        if chargeable_days == 0 {
            return Ok(InterestAccrual {
                principal,
                accrued_interest: Money::ZERO.round_dp(2),
                total_amount: principal,
                chargeable_days: 0,
                daily_rate,
            });
        }

        let factor = daily_rate.compound_factor(chargeable_days);
        let accrued_interest =
            Money::from_decimal(principal.as_decimal() * (factor - Decimal::ONE)).round_dp(2);

        Ok(InterestAccrual {
            principal,
            accrued_interest,
            total_amount: principal + accrued_interest,
            chargeable_days,
            daily_rate,
        })
    }

    fn validate(&self, principal: Money, annual_rate: Rate, elapsed_days: u32) -> Result<()> {
        if !principal.is_positive() {
            return Err(CalculationError::InvalidPrincipal { principal });
        }
        if !annual_rate.is_positive() {
            return Err(CalculationError::InvalidRate { rate: annual_rate });
        }
        if elapsed_days > self.config.max_elapsed_days {
            return Err(CalculationError::InvalidDuration {
                days: elapsed_days,
                maximum: self.config.max_elapsed_days,
            });
        }
        Ok(())
    }
}
