// Game logic: catalog, shuffling, placement rules, scoring and the session clock

pub mod activity;
pub mod catalog;
pub mod clock;
pub mod controller;
pub mod events;
pub mod scoring;
pub mod shuffle;

pub use activity::ActivityLog;
pub use catalog::{find_stage, resolve_stage, CATALOG};
pub use clock::{Clock, ManualClock, SystemClock, Ticker};
pub use controller::Controller;
pub use events::{Event, MessageCategory, Signal};
pub use scoring::{AccuracyTier, ScoreReport};
