pub mod batch;
pub mod course;
pub mod lead;
pub mod pricing;
pub mod quiz;
pub mod trainer;

pub use batch::Batch;
pub use course::{Audience, Course, CourseStatus, Faq, Stage};
pub use lead::{LeadResponse, PreRegisterLeadRequest, RegisterLeadRequest, RegistrantDetails};
pub use pricing::{CoursePrice, Currency};
pub use quiz::{Background, Goal, QuizAnswers, TechComfort};
pub use trainer::Trainer;
