pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod mortgage;

// re-export key types
pub use config::{AccrualConfig, MortgageConfig};
pub use decimal::{Money, Rate};
pub use errors::{CalculationError, Result};
pub use interest::{AccrualEngine, InterestAccrual};
pub use mortgage::{
    Installment, MortgageEngine, MortgageEstimate, MortgageRequest,
};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
