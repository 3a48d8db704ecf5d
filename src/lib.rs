pub mod calc;
pub mod cli;
pub mod errors;
pub mod format;
pub mod input;
pub mod session;

pub use calc::{calculate, power, BigPower, Exponent, Powers};
pub use errors::PowerCalcError;
