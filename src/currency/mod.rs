pub mod amount;
pub mod renderer;

pub use amount::*;
pub use renderer::*;
