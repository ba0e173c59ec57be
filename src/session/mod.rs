pub mod drill;
pub use drill::*;

pub mod stats;
pub use stats::*;
