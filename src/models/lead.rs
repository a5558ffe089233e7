use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registrant-specific fields. The teen form collects schooling details,
/// the engineering form collects role and Python experience; the two
/// shapes share everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistrantDetails {
    Student {
        age: String,
        grade: String,
        school: String,
    },
    Engineer {
        role: String,
        python: String,
    },
}

/// Enrollment lead for a live course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterLeadRequest {
    pub name: String,
    pub email: String,
    pub course_slug: String,
    #[serde(flatten)]
    pub details: RegistrantDetails,
    pub batch: Option<String>,
    pub notes: Option<String>,
}

/// Interest lead for a course that is not yet scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreRegisterLeadRequest {
    pub name: String,
    pub email: String,
    pub course_slug: String,
    pub background: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadResponse {
    pub lead_id: Uuid,
    pub message: String,
    /// Deep link the frontend opens to continue the conversation.
    /// Absent for pre-registrations, which end at the confirmation state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}
