//! Course recommendation scoring.
//!
//! Maps a visitor's three quiz answers to the 1-2 most relevant courses.
//! The point values are hand-tuned business rules maintained alongside the
//! catalog content; they are data, not a formula.

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::{Background, Course, Goal, QuizAnswers, TechComfort};

type PointRow = &'static [(&'static str, i32)];

fn background_points(background: Background) -> PointRow {
    match background {
        Background::HighSchool => &[("teen-ai-builders", 3)],
        Background::CollegeTech => &[
            ("ai-ready-engineer", 3),
            ("ai-engineering-agentic-foundations", 2),
        ],
        Background::Professional => &[
            ("ai-engineering-agentic-foundations", 3),
            ("ai-product-builder", 2),
            ("ai-foundations-job-ready-16-weeks", 2),
        ],
        Background::NonTech => &[
            ("executive-ai-strategy", 3),
            ("ai-foundations-job-ready-16-weeks", 2),
        ],
    }
}

fn tech_comfort_points(tech_comfort: TechComfort) -> PointRow {
    match tech_comfort {
        TechComfort::None => &[
            ("teen-ai-builders", 2),
            ("ai-foundations-job-ready-16-weeks", 2),
        ],
        TechComfort::Basic => &[
            ("ai-foundations-job-ready-16-weeks", 2),
            ("ai-ready-engineer", 1),
        ],
        TechComfort::Comfortable => &[
            ("ai-engineering-agentic-foundations", 2),
            ("ai-product-builder", 2),
        ],
    }
}

fn goal_points(goal: Goal) -> PointRow {
    match goal {
        Goal::Explore => &[("teen-ai-builders", 2)],
        Goal::GetHired => &[
            ("ai-ready-engineer", 3),
            ("ai-foundations-job-ready-16-weeks", 2),
        ],
        Goal::BuildProduct => &[
            ("ai-product-builder", 3),
            ("ai-engineering-agentic-foundations", 1),
        ],
        Goal::LeadStrategy => &[("executive-ai-strategy", 3)],
    }
}

/// Rank the catalog against one quiz submission and return the top matches,
/// highest score first.
///
/// Pure and total: every answer combination produces a deterministic result,
/// an empty list is a valid outcome ("no signal matched"), and the output
/// never holds more than two courses. Zero-score courses are dropped, and
/// ties are broken by catalog definition order (stable sort).
pub fn recommend_courses<'a>(catalog: &'a Catalog, answers: QuizAnswers) -> Vec<&'a Course> {
    let mut scores: HashMap<&str, i32> = catalog
        .courses()
        .iter()
        .map(|c| (c.slug.as_str(), 0))
        .collect();

    let contributions = background_points(answers.background)
        .iter()
        .chain(tech_comfort_points(answers.tech_comfort))
        .chain(goal_points(answers.goal));
    for &(slug, points) in contributions {
        *scores.entry(slug).or_insert(0) += points;
    }

    let mut ranked: Vec<(&str, i32)> = catalog
        .courses()
        .iter()
        .map(|c| {
            let slug = c.slug.as_str();
            (slug, scores.get(slug).copied().unwrap_or(0))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .filter(|&(_, score)| score > 0)
        .take(2)
        .filter_map(|(slug, _)| catalog.course_by_slug(slug))
        .collect()
}

/// Total score one course would receive for the given answers. Used by the
/// API to annotate recommendation cards.
pub fn course_score(slug: &str, answers: QuizAnswers) -> i32 {
    background_points(answers.background)
        .iter()
        .chain(tech_comfort_points(answers.tech_comfort))
        .chain(goal_points(answers.goal))
        .filter(|&&(s, _)| s == slug)
        .map(|&(_, points)| points)
        .sum()
}
