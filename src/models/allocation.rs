//! Allocation request and result models.
//!
//! A request bundles the three inputs of a TOS allocation. A result is the
//! integer matrix with its row and column targets; it is built fresh per
//! call and never mutated by the engine afterwards.

use serde::{Deserialize, Serialize};

use super::{ColumnSpec, TopicWeight, COLUMN_COUNT};

/// Input container for a TOS allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Total number of test items.
    pub total_items: i64,
    /// Cognitive-level column percentages.
    pub column_spec: ColumnSpec,
    /// Topics (rows) weighted by hours.
    pub topics: Vec<TopicWeight>,
}

impl AllocationRequest {
    /// Creates a request with no topics.
    pub fn new(total_items: i64, column_spec: ColumnSpec) -> Self {
        Self {
            total_items,
            column_spec,
            topics: Vec::new(),
        }
    }

    /// Adds a topic.
    pub fn with_topic(mut self, topic: impl Into<String>, hours: f64) -> Self {
        self.topics.push(TopicWeight::new(topic, hours));
        self
    }

    /// Replaces the topic list.
    pub fn with_topics(mut self, topics: Vec<TopicWeight>) -> Self {
        self.topics = topics;
        self
    }
}

/// Integer allocation of items to topics × cognitive levels.
///
/// For every successful result:
/// - `matrix[i]` sums to `row_targets[i]`
/// - column `j` of `matrix` sums to `col_targets[j]`
/// - `row_targets` and `col_targets` both sum to the total item count
/// - `row_percents` sums to 100 when there is at least one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Items per topic.
    pub row_targets: Vec<i64>,
    /// Expected items per column.
    pub col_targets: [i64; COLUMN_COUNT],
    /// Items per (topic, column) cell.
    pub matrix: Vec<[i64; COLUMN_COUNT]>,
    /// Each topic's share of 100, independent of the item count.
    pub row_percents: Vec<i64>,
}

impl AllocationResult {
    /// Number of topic rows.
    pub fn row_count(&self) -> usize {
        self.matrix.len()
    }

    /// Total allocated items.
    pub fn total_items(&self) -> i64 {
        self.row_targets.iter().sum()
    }

    /// Sum of the cells in row `i`.
    pub fn row_sum(&self, i: usize) -> i64 {
        self.matrix[i].iter().sum()
    }

    /// Sum of the cells in column `j`.
    pub fn column_sum(&self, j: usize) -> i64 {
        self.matrix.iter().map(|row| row[j]).sum()
    }
}
