use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Inr,
    Usd,
}

/// Display pricing for one course. Prices are marketing strings, not
/// amounts ("Starting at ₹24,780"); courses without a listed price are
/// quoted on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePrice {
    pub course_slug: String,
    pub inr: String,
    pub usd: String,
}

impl CoursePrice {
    pub fn display(&self, currency: Currency) -> &str {
        match currency {
            Currency::Inr => &self.inr,
            Currency::Usd => &self.usd,
        }
    }
}
