//! Scenario comparison: landfill baseline against each treatment pathway.
//!
//! [`run_scenario`] materialises every series the presentation layer needs.
//! [`AvoidedEmissionsObjective`] is the lean scalar form evaluated thousands
//! of times by the sensitivity and uncertainty engines.

pub mod comparator;
pub mod objective;


pub use comparator::*;
pub use objective::*;
