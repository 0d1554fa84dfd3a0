//! TOS allocation engine.
//!
//! Layered from the leaves up:
//!
//! - [`apportion`]: one-dimensional largest-remainder rounding
//! - [`MatrixAllocator`]: row/column-consistent integer matrices
//! - [`TosAllocationBuilder`]: derives row and column targets from topic
//!   hours and column percentages, then integerizes the matrix
//! - [`AllocationQuality`]: rounding error of a finished allocation
//!
//! Every operation is a synchronous, side-effect-free function over its
//! inputs. Concurrent calls share nothing.
//!
//! # References
//!
//! - Balinski & Young (2001), "Fair Representation"
//! - Cox & Ernst (1982), "Controlled Rounding", INFOR 20(4)

mod apportion;
mod builder;
mod matrix;
mod quality;

pub use apportion::apportion;
pub use builder::TosAllocationBuilder;
pub use matrix::{MatrixAllocator, DEFAULT_ITERATION_FACTOR};
pub use quality::AllocationQuality;
