use thiserror::Error;

use crate::decimal::{Money, Rate};

/// Named validation failures surfaced by the calculation engines.
///
/// Every variant identifies a single out-of-domain input so callers can map
/// it to field-specific guidance. Validation runs before any computation, and
/// arithmetic cannot fail for inputs that pass it, so this is the complete
/// failure surface of the crate.
#[derive(Error, Debug)]
pub enum CalculationError {
    #[error("principal must be positive: {principal}")]
    InvalidPrincipal {
        principal: Money,
    },

    #[error("annual rate must be positive: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("elapsed days must be at most {maximum}: {days}")]
    InvalidDuration {
        days: u32,
        maximum: u32,
    },

    #[error("loan amount below minimum: minimum {minimum}, provided {provided}")]
    LoanAmountTooLow {
        minimum: Money,
        provided: Money,
    },

    #[error("term must be between {minimum} and {maximum} months: {months}")]
    InvalidTerm {
        months: u32,
        minimum: u32,
        maximum: u32,
    },

    #[error("property value must exceed loan amount: property {property_value}, loan {loan_amount}")]
    PropertyValueTooLow {
        property_value: Money,
        loan_amount: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CalculationError>;
