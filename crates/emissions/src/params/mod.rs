//! Simulation inputs: the frozen [`ParameterSet`], the brewery profile it is
//! derived from, and the uncertain-factor triple used by the analysis layers.

pub mod brewery;
pub mod factors;
pub mod parameter_set;


pub use brewery::*;
pub use factors::*;
pub use parameter_set::*;
