pub mod assemble;
pub mod snapshot;
pub mod store;

pub use assemble::*;
pub use snapshot::*;
pub use store::*;
