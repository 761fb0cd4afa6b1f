// Core data models for the pipeline quiz

pub mod stage;
pub mod placement;
pub mod session;
pub mod log_entry;

pub use stage::*;
pub use placement::*;
pub use session::*;
pub use log_entry::*;
