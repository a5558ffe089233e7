pub mod seed;

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Batch, Course, CoursePrice, Stage, Trainer};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate course slug: {0}")]
    DuplicateSlug(String),

    #[error("stage {0:?} is assigned to more than one course")]
    DuplicateStage(Stage),

    #[error("{kind} references unknown course slug: {slug}")]
    UnknownCourse { kind: &'static str, slug: String },
}

/// The full read-only content set the site is built from. Constructed once
/// at startup and shared immutably behind the app state; nothing mutates it
/// afterwards, so handlers can read it without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    batches: Vec<Batch>,
    trainers: Vec<Trainer>,
    prices: Vec<CoursePrice>,
}

impl Catalog {
    pub fn new(
        courses: Vec<Course>,
        batches: Vec<Batch>,
        trainers: Vec<Trainer>,
        prices: Vec<CoursePrice>,
    ) -> Result<Self, CatalogError> {
        let mut slugs = HashSet::new();
        let mut stages = HashSet::new();
        for course in &courses {
            if !slugs.insert(course.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(course.slug.clone()));
            }
            if let Some(stage) = course.stage {
                if !stages.insert(stage) {
                    return Err(CatalogError::DuplicateStage(stage));
                }
            }
        }

        for batch in &batches {
            if !slugs.contains(batch.course_slug.as_str()) {
                return Err(CatalogError::UnknownCourse {
                    kind: "batch",
                    slug: batch.course_slug.clone(),
                });
            }
        }
        for price in &prices {
            if !slugs.contains(price.course_slug.as_str()) {
                return Err(CatalogError::UnknownCourse {
                    kind: "price",
                    slug: price.course_slug.clone(),
                });
            }
        }

        Ok(Self {
            courses,
            batches,
            trainers,
            prices,
        })
    }

    /// The production content set. Panics on a seed-content typo that
    /// violates a catalog invariant; the catalog tests catch that before
    /// anything is served.
    pub fn seed() -> Self {
        Self::new(
            seed::courses(),
            seed::batches(),
            seed::trainers(),
            seed::prices(),
        )
        .expect("seed catalog violates a content invariant")
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course_by_slug(&self, slug: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.slug == slug)
    }

    /// The staged courses in journey order, one per stage. Courses without
    /// a stage do not appear in the journey view.
    pub fn journey_courses(&self) -> Vec<&Course> {
        Stage::ALL
            .iter()
            .filter_map(|stage| self.courses.iter().find(|c| c.stage == Some(*stage)))
            .collect()
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn batches_for_course(&self, slug: &str) -> Vec<&Batch> {
        self.batches
            .iter()
            .filter(|b| b.course_slug == slug)
            .collect()
    }

    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    pub fn prices(&self) -> &[CoursePrice] {
        &self.prices
    }

    pub fn price_for_course(&self, slug: &str) -> Option<&CoursePrice> {
        self.prices.iter().find(|p| p.course_slug == slug)
    }
}
