//! Level-synchronous traversal: the driver loop, the expansion strategies,
//! and the weighted reducer.

pub mod driver;
pub mod expand;
pub mod reduce;

pub use driver::{DriverState, LevelDriver, LevelReport};
pub use expand::{expand, PlacementPlan, Strategy};
