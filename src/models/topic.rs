//! Topic (row) model.

use serde::{Deserialize, Serialize};

/// A topic and its instructional hours.
///
/// Hours weight the topic's share of the total item count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicWeight {
    /// Topic label as shown in the TOS.
    pub topic: String,
    /// Allotted instructional hours (non-negative).
    pub hours: f64,
}

impl TopicWeight {
    /// Creates a topic weight.
    pub fn new(topic: impl Into<String>, hours: f64) -> Self {
        Self {
            topic: topic.into(),
            hours,
        }
    }
}

/// Sum of hours across topics.
pub fn total_hours(topics: &[TopicWeight]) -> f64 {
    topics.iter().map(|t| t.hours).sum()
}
