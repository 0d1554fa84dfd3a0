//! Table-of-Specification (TOS) item allocation for the U-Engine ecosystem.
//!
//! Given a total number of test items, four cognitive-level column
//! percentages, and topics weighted by instructional hours, produces an
//! integer matrix whose rows and columns sum exactly to their apportioned
//! targets.
//!
//! # Modules
//!
//! - **`models`**: Value types — `ColumnSpec`, `TopicWeight`,
//!   `AllocationRequest`, `AllocationResult`, `TosTable`
//! - **`allocation`**: Apportioner, matrix allocator, builder, quality metrics
//! - **`validation`**: Column spec and topic checks
//! - **`error`**: `AllocError` and the crate `Result`
//!
//! # Example
//!
//! ```
//! use u_tos::allocation::TosAllocationBuilder;
//! use u_tos::models::{AllocationRequest, ColumnSpec, TosTable};
//!
//! let request = AllocationRequest::new(10, ColumnSpec::new(40, 30, 20, 10))
//!     .with_topic("Sets", 1.0)
//!     .with_topic("Functions", 2.0);
//!
//! let result = TosAllocationBuilder::new().build_request(&request).unwrap();
//! let table = TosTable::assemble(request.column_spec, &request.topics, &result).unwrap();
//!
//! assert_eq!(table.totals.total_items, 10);
//! assert_eq!(table.totals.total_percent, 100);
//! assert_eq!(table.totals.total_columns, [4, 3, 2, 1]);
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events (`debug` per build, `trace` per greedy pass,
//! `warn` when the fallback pass runs). No subscriber is installed.

pub mod allocation;
pub mod error;
pub mod models;
pub mod validation;

pub use error::{AllocError, Axis, Result};
