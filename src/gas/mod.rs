pub mod fee_calculator;
pub mod gas_input;
pub mod transaction;

pub use fee_calculator::*;
pub use gas_input::*;
pub use transaction::*;
