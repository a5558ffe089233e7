use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled instance of a course. References the course by slug only;
/// batches are static seed data with no runtime mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub course_slug: String,
    pub course_title: String,
    pub label: String,
    pub start_date: NaiveDate,
    pub days: String,
    pub time: String,
    pub duration: String,
}
