//! Simulation driving: clock, plusargs, and the phase-sequencing driver.
//!
//! Provides the two-phase clock that paces a run, the plusarg parser used to forward
//! process arguments to a design, and the `Driver` that ties a design to a recorder.

pub mod clock;
pub mod driver;
pub mod plusargs;

pub use clock::SimClock;
pub use driver::{Driver, Phase};
pub use plusargs::PlusArgs;
