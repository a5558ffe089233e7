use std::env;

use url::Url;

pub const SITE_NAME: &str = "GradTensor";
pub const NEXT_BATCH: &str = "April 2026";

/// Canned WhatsApp conversation openers, keyed by the call-to-action that
/// uses them. Site content, compiled in like the catalog.
pub const MESSAGE_TEMPLATES: &[(&str, &str)] = &[
    ("general", "Hi, I'd like to know more about GradTensor courses"),
    (
        "advisor",
        "Hi, I'd like to speak with an advisor about GradTensor courses",
    ),
    ("enroll", "Hi, I'm interested in enrolling in the course"),
    ("syllabus", "Hi, I'd like to request the syllabus"),
    (
        "executive",
        "Hi, I'm interested in the Executive AI program. Here's what I'd find valuable:",
    ),
    ("suggest", "Hi, I'd like to suggest a course topic:"),
];

/// Runtime configuration. The WhatsApp number is site content with a known
/// default; only deployment-specific values come from the environment.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub whatsapp_number: String,
    /// Spreadsheet-backed intake webhook. Absent means leads are logged but
    /// not forwarded (local development).
    pub intake_webhook_url: Option<String>,
    pub port: u16,
}

impl SiteConfig {
    pub fn new_from_env() -> Self {
        let whatsapp_number =
            env::var("WHATSAPP_NUMBER").unwrap_or_else(|_| "919108030542".to_string());
        let intake_webhook_url = env::var("INTAKE_WEBHOOK_URL").ok();
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            whatsapp_number,
            intake_webhook_url,
            port,
        }
    }

    /// `wa.me` deep link with a pre-filled message.
    pub fn whatsapp_link(&self, message: &str) -> String {
        let base = format!("https://wa.me/{}", self.whatsapp_number);
        match Url::parse_with_params(&base, &[("text", message)]) {
            Ok(url) => url.into(),
            // The base URL is well-formed by construction; fall back to a
            // bare chat link rather than failing the lead.
            Err(_) => base,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "919108030542".to_string(),
            intake_webhook_url: None,
            port: 3000,
        }
    }
}
