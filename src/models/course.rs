use serde::{Deserialize, Serialize};

/// Position of a course in the five-step guided learning journey.
/// At most one course in the catalog carries each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Discover,
    Portfolio,
    Production,
    Ship,
    Advise,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Discover,
        Stage::Portfolio,
        Stage::Production,
        Stage::Ship,
        Stage::Advise,
    ];

    /// 1-based position shown in the journey UI.
    pub fn number(self) -> u8 {
        match self {
            Stage::Discover => 1,
            Stage::Portfolio => 2,
            Stage::Production => 3,
            Stage::Ship => 4,
            Stage::Advise => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Discover => "Discover",
            Stage::Portfolio => "Build a Portfolio",
            Stage::Production => "Go Production-Grade",
            Stage::Ship => "Ship Your Product",
            Stage::Advise => "Lead & Advise",
        }
    }
}

/// Visitor segment a course targets. A course may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    HighSchool,
    Engineering,
    NonTech,
    SeniorIt,
}

/// Whether a course is open for enrollment or only collecting interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    Live,
    PreRegister,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub slug: String,
    pub stage: Option<Stage>,
    pub audiences: Vec<Audience>,
    pub status: CourseStatus,
    pub title: String,
    pub tagline: String,
    pub duration: String,
    pub hours: String,
    pub ideal_for: String,
    pub weeks: Vec<String>,
    pub projects: Vec<String>,
    pub who_for: Vec<String>,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub faqs: Vec<Faq>,
}

impl Course {
    pub fn is_live(&self) -> bool {
        self.status == CourseStatus::Live
    }
}
