//! TOS allocation domain models.
//!
//! Plain value types consumed and produced by the allocation engine.
//! Nothing here performs allocation; see [`crate::allocation`].
//!
//! # Domain Mappings
//!
//! | u-tos | TOS document |
//! |-------|--------------|
//! | ColumnSpec | col1..col4 percentages |
//! | TopicWeight | Selected course-outline topic + allotted hours |
//! | AllocationResult | Expected column counts + row values |
//! | TosRow / TosTotals | Persisted rows and the totals line |

mod allocation;
mod column_spec;
mod table;
mod topic;

pub use allocation::{AllocationRequest, AllocationResult};
pub use column_spec::{ColumnSpec, COLUMN_COUNT, KNOWLEDGE_CAP};
pub use table::{TosRow, TosTable, TosTotals};
pub use topic::{total_hours, TopicWeight};
