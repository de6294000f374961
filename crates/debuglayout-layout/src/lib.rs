//! Band arrangement contracts for the debug layout overlay
//!
//! Resolves abstract row/column descriptions into concrete pixel bands.
//! The calculator is axis-agnostic: rows and columns share the same code.

mod arrangement;
mod axis;
mod count;

pub use arrangement::*;
pub use axis::*;
pub use count::*;

pub mod prelude {
    pub use crate::arrangement::{Arrangement, ArrangementCalculator, Band};
    pub use crate::axis::Axis;
    pub use crate::count::BandCount;
}
