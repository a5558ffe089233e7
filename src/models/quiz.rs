use serde::{Deserialize, Serialize};

/// Self-reported background of the quiz taker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    HighSchool,
    CollegeTech,
    Professional,
    NonTech,
}

impl Background {
    pub const ALL: [Background; 4] = [
        Background::HighSchool,
        Background::CollegeTech,
        Background::Professional,
        Background::NonTech,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechComfort {
    None,
    Basic,
    Comfortable,
}

impl TechComfort {
    pub const ALL: [TechComfort; 3] = [
        TechComfort::None,
        TechComfort::Basic,
        TechComfort::Comfortable,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    Explore,
    GetHired,
    BuildProduct,
    LeadStrategy,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::Explore,
        Goal::GetHired,
        Goal::BuildProduct,
        Goal::LeadStrategy,
    ];
}

/// One complete quiz submission. All three answers are required; the
/// frontend disables submission until every dimension is chosen, and a
/// missing field fails deserialization here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub background: Background,
    pub tech_comfort: TechComfort,
    pub goal: Goal,
}
