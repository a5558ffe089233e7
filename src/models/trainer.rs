use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerBook {
    pub publisher: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    pub slug: String,
    pub name: String,
    pub title: String,
    pub bio: Vec<String>,
    pub highlights: Vec<String>,
    pub books: Vec<TrainerBook>,
    pub links: Vec<TrainerLink>,
}
