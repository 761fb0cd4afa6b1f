pub mod duration;
pub mod prefix;

pub use duration::*;
pub use prefix::*;
