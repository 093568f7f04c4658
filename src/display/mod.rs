pub mod config;
pub mod formatter;
pub mod plan;

pub use config::*;
pub use formatter::*;
pub use plan::*;
