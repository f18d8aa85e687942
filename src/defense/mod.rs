//! Zone bookkeeping and reinforcement.
//!
//! Trackers measure what each zone lost since the last turn, the lottery
//! turns those losses into a spending order, and policies drive each zone
//! toward its target configuration. `SideController` ties the three zones
//! of one flank together.

pub mod lottery;
pub mod policy;
pub mod side;
pub mod tracker;

pub use lottery::{draw, WeightedQueue, TICKET_RESOLUTION};
pub use policy::RegionPolicy;
pub use side::{DamageMeasure, SideController, Zone};
pub use tracker::{Damage, RegionTracker, Repair};
