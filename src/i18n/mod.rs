pub mod localizer;
pub mod messages;

pub use localizer::*;
pub use messages::*;
