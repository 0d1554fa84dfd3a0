//! Column (cognitive level) model.
//!
//! A TOS has four cognitive-level columns. The first one holds
//! knowledge-level items and is capped at [`KNOWLEDGE_CAP`] percent.

use serde::{Deserialize, Serialize};

/// Number of cognitive-level columns in a TOS.
pub const COLUMN_COUNT: usize = 4;

/// Maximum percentage allowed for the knowledge column.
pub const KNOWLEDGE_CAP: i32 = 50;

/// Percentage targets for the four cognitive-level columns.
///
/// Construction does not validate; see
/// [`validate_column_spec`](crate::validation::validate_column_spec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column percentages `p1..p4`, expected to sum to 100.
    pub percentages: [i32; COLUMN_COUNT],
}

impl ColumnSpec {
    /// Creates a column spec from four percentages.
    pub fn new(p1: i32, p2: i32, p3: i32, p4: i32) -> Self {
        Self {
            percentages: [p1, p2, p3, p4],
        }
    }

    /// Knowledge column percentage (`p1`).
    pub fn knowledge(&self) -> i32 {
        self.percentages[0]
    }

    /// Sum of all column percentages.
    pub fn total(&self) -> i32 {
        self.percentages.iter().sum()
    }

    /// Column weights as proportions (`p_j / 100`).
    pub fn weights(&self) -> [f64; COLUMN_COUNT] {
        self.percentages.map(|p| f64::from(p) / 100.0)
    }

    /// Ideal (real-valued) item count per column for `total_items`.
    pub fn ideal_counts(&self, total_items: i64) -> [f64; COLUMN_COUNT] {
        // Multiply before dividing so exact multiples of 100 stay exact.
        self.percentages
            .map(|p| (total_items as f64 * f64::from(p)) / 100.0)
    }
}
