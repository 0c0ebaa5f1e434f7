use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MortgageConfig;
use crate::decimal::{Money, Rate};

/// one row of an amortization schedule
///
/// Components are rounded to 2 decimal places half-to-even at emission; the
/// running balance itself is carried unrounded between months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub month: u32,
    pub principal_component: Money,
    pub interest_component: Money,
    pub remaining_balance: Money,
    pub prepayment_penalty_applied: bool,
}

/// level payment for a fixed-rate, fixed-term loan
///
/// Standard annuity formula arranged as `P * m * c / (c - 1)` with
/// `c = (1 + m)^term`, so the negative power never has to be formed. Rounded
/// to 2 decimal places half-to-even.
pub fn level_payment(principal: Money, monthly_rate: Rate, term_months: u32) -> Money {
    let compound = monthly_rate.compound_factor(term_months);
    let numerator = principal.as_decimal() * monthly_rate.as_decimal() * compound;
    let denominator = compound - Decimal::ONE;
    Money::from_decimal(numerator / denominator).round_dp(2)
}

/// month-by-month amortization schedule builder
pub struct ScheduleBuilder<'a> {
    config: &'a MortgageConfig,
}

impl<'a> ScheduleBuilder<'a> {
    pub fn new(config: &'a MortgageConfig) -> Self {
        Self { config }
    }

    /// build the full schedule from month 1 until the balance clears or the
    /// term is exhausted
    ///
    /// `payment` must be the base level payment: an insurance surcharge is a
    /// servicing cost and never reduces principal. Voluntary prepayments are
    /// capped at the outstanding balance each month, and principal reduction
    /// never overshoots the balance. The final scheduled month clears the
    /// whole remaining balance, absorbing the sub-cent-per-month residual
    /// left by rounding the payment.
    pub fn build(
        &self,
        principal: Money,
        monthly_rate: Rate,
        payment: Money,
        term_months: u32,
        monthly_prepayment: Money,
    ) -> Vec<Installment> {
        let rate = monthly_rate.as_decimal();
        let prepayment = monthly_prepayment.as_decimal();
        let penalty_rate = self.config.prepayment_penalty_rate.as_decimal();

        let mut schedule = Vec::with_capacity(term_months as usize);
        let mut balance = principal.as_decimal();
        let mut month = 0;

        while month < term_months && balance > Decimal::ZERO {
            month += 1;

            let interest = balance * rate;
            let principal_component = payment.as_decimal() - interest;
            let extra = prepayment.min(balance);

            // penalty amount is assessed but only its presence is reported
            let penalty = if prepayment > Decimal::ZERO && month <= self.config.penalty_window_months
            {
                extra * penalty_rate
            } else {
                Decimal::ZERO
            };

            let mut reduction = (principal_component + extra).min(balance);
            if month == term_months {
                reduction = balance;
            }
            balance -= reduction;

            schedule.push(Installment {
                month,
                principal_component: Money::from_decimal(principal_component).round_dp(2),
                interest_component: Money::from_decimal(interest).round_dp(2),
                remaining_balance: Money::from_decimal(balance.max(Decimal::ZERO)).round_dp(2),
                prepayment_penalty_applied: penalty > Decimal::ZERO,
            });

            if balance <= Decimal::ZERO {
                break;
            }
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn monthly(percent: Decimal) -> Rate {
        Rate::from_percentage(percent).monthly()
    }

    #[test]
    fn test_level_payment_reference_values() {
        assert_eq!(
            level_payment(Money::from_major(160_000), monthly(dec!(5.0)), 360),
            Money::from_str_exact("858.91").unwrap()
        );
        assert_eq!(
            level_payment(Money::from_major(180_000), monthly(dec!(5.0)), 360),
            Money::from_str_exact("966.28").unwrap()
        );
        assert_eq!(
            level_payment(Money::from_major(100_000), monthly(dec!(5.0)), 60),
            Money::from_str_exact("1887.12").unwrap()
        );
        assert_eq!(
            level_payment(Money::from_major(50_000), monthly(dec!(5.0)), 360),
            Money::from_str_exact("268.41").unwrap()
        );
    }

    #[test]
    fn test_schedule_runs_full_term() {
        let config = MortgageConfig::default();
        let principal = Money::from_major(160_000);
        let rate = monthly(dec!(5.0));
        let payment = level_payment(principal, rate, 360);

        let schedule = ScheduleBuilder::new(&config).build(principal, rate, payment, 360, Money::ZERO);

        assert_eq!(schedule.len(), 360);

        let first = &schedule[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.principal_component, Money::from_str_exact("192.24").unwrap());
        assert_eq!(first.interest_component, Money::from_str_exact("666.67").unwrap());
        assert_eq!(first.remaining_balance, Money::from_str_exact("159807.76").unwrap());
        assert!(!first.prepayment_penalty_applied);

        let last = schedule.last().unwrap();
        assert_eq!(last.month, 360);
        assert_eq!(last.remaining_balance, Money::ZERO);
    }

    #[test]
    fn test_components_sum_to_payment() {
        let config = MortgageConfig::default();
        let principal = Money::from_major(160_000);
        let rate = monthly(dec!(5.0));
        let payment = level_payment(principal, rate, 360);

        let schedule = ScheduleBuilder::new(&config).build(principal, rate, payment, 360, Money::ZERO);

        for row in &schedule {
            assert_eq!(
                row.principal_component + row.interest_component,
                payment,
                "month {}",
                row.month
            );
        }
    }

    #[test]
    fn test_balance_non_increasing() {
        let config = MortgageConfig::default();
        let principal = Money::from_major(160_000);
        let rate = monthly(dec!(5.0));
        let payment = level_payment(principal, rate, 360);

        let schedule = ScheduleBuilder::new(&config).build(principal, rate, payment, 360, Money::ZERO);

        let mut previous = principal;
        for row in &schedule {
            assert!(row.remaining_balance <= previous, "month {}", row.month);
            previous = row.remaining_balance;
        }
    }

    #[test]
    fn test_interest_declines_as_principal_amortizes() {
        let config = MortgageConfig::default();
        let principal = Money::from_major(100_000);
        let rate = monthly(dec!(5.0));
        let payment = level_payment(principal, rate, 60);

        let schedule = ScheduleBuilder::new(&config).build(principal, rate, payment, 60, Money::ZERO);

        for pair in schedule.windows(2) {
            assert!(pair[1].interest_component < pair[0].interest_component);
            assert!(pair[1].principal_component > pair[0].principal_component);
        }
    }

    #[test]
    fn test_prepayment_shortens_schedule() {
        let config = MortgageConfig::default();
        let principal = Money::from_major(50_000);
        let rate = monthly(dec!(5.0));
        let payment = level_payment(principal, rate, 360);

        let schedule = ScheduleBuilder::new(&config).build(
            principal,
            rate,
            payment,
            360,
            Money::from_major(10_000),
        );

        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule.last().unwrap().remaining_balance, Money::ZERO);
        assert_eq!(
            schedule[0].remaining_balance,
            Money::from_str_exact("39939.92").unwrap()
        );
    }

    #[test]
    fn test_penalty_window_flags() {
        let config = MortgageConfig::default();
        let principal = Money::from_major(100_000);
        let rate = monthly(dec!(5.0));
        let payment = level_payment(principal, rate, 360);

        let schedule = ScheduleBuilder::new(&config).build(
            principal,
            rate,
            payment,
            360,
            Money::from_major(1_000),
        );

        // payoff well before term, penalty only inside the first 24 months
        assert_eq!(schedule.len(), 77);
        for row in &schedule {
            assert_eq!(row.prepayment_penalty_applied, row.month <= 24, "month {}", row.month);
        }
    }

    #[test]
    fn test_no_prepayment_never_flags_penalty() {
        let config = MortgageConfig::default();
        let principal = Money::from_major(100_000);
        let rate = monthly(dec!(5.0));
        let payment = level_payment(principal, rate, 60);

        let schedule = ScheduleBuilder::new(&config).build(principal, rate, payment, 60, Money::ZERO);

        assert!(schedule.iter().all(|row| !row.prepayment_penalty_applied));
    }

    #[test]
    fn test_final_row_absorbs_rounding_residual() {
        // 858.91 underpays the exact annuity by a fraction of a cent each
        // month; the last scheduled installment still lands on zero
        let config = MortgageConfig::default();
        let principal = Money::from_major(160_000);
        let rate = monthly(dec!(5.0));
        let payment = level_payment(principal, rate, 360);

        let schedule = ScheduleBuilder::new(&config).build(principal, rate, payment, 360, Money::ZERO);

        let last = schedule.last().unwrap();
        assert_eq!(last.month, 360);
        assert_eq!(last.remaining_balance, Money::ZERO);
        assert_eq!(last.interest_component, Money::from_str_exact("3.58").unwrap());
    }
}
