//! Turn-level strategy.
//!
//! `Orchestrator` owns both flank controllers for the whole match and
//! decides each turn how the structure and mobile budgets are spent.

pub mod economy;
pub mod mobile;
pub mod opening;
pub mod orchestrator;

pub use economy::{Economy, FarmSurvey};
pub use mobile::Dispatch;
pub use orchestrator::{Orchestrator, TurnMode, TurnReport};
