//! Hand-authored site content. Edited by the business, not derived from
//! anything; tests pin the structural invariants (unique slugs, one course
//! per stage) but the copy itself is free-form.

use chrono::NaiveDate;

use crate::models::course::{Audience, Course, CourseStatus, Faq, Stage};
use crate::models::{Batch, CoursePrice, Trainer};
use crate::models::trainer::{TrainerBook, TrainerLink};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn faq(q: &str, a: &str) -> Faq {
    Faq {
        q: q.to_string(),
        a: a.to_string(),
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            slug: "teen-ai-builders".to_string(),
            stage: Some(Stage::Discover),
            audiences: vec![Audience::HighSchool],
            status: CourseStatus::Live,
            title: "Teen AI Builders".to_string(),
            tagline: "Go from AI-curious to AI builder in 4 weeks".to_string(),
            duration: "4 weeks".to_string(),
            hours: "8 live hours + project time".to_string(),
            ideal_for: "School students (grades 8-12) with no coding experience".to_string(),
            weeks: strings(&[
                "Week 1: Understand and Set Up - how conversational AI actually works, and your first program that talks to an AI",
                "Week 2: Personality and Memory - control how your AI thinks and speaks, and make it remember the conversation",
                "Week 3: Purpose and Interface - give your AI a real job and turn it into an app anyone can use",
                "Week 4: Refine and Showcase - personalise your build and present it to a real audience",
            ]),
            projects: strings(&[
                "AI chatbot that answers questions on any topic you choose",
                "AI-powered app that solves a real problem you care about",
                "Team project built and presented with peers",
            ]),
            who_for: strings(&[
                "Teens curious about how AI actually works under the hood",
                "Students who want a real project for their portfolio before college",
                "Complete beginners - no coding experience needed",
            ]),
            cta_primary: "Register Now".to_string(),
            cta_secondary: "Talk to Us".to_string(),
            faqs: vec![
                faq(
                    "Does my teen need any coding experience?",
                    "None at all. This course is designed for complete beginners. Students learn to use AI tools to generate and understand code - which is how modern developers actually work.",
                ),
                faq(
                    "What equipment is needed?",
                    "Any laptop or desktop bought in the last 5-6 years with a stable broadband connection. A tablet or phone is not sufficient for the coding sessions.",
                ),
            ],
        },
        Course {
            slug: "ai-ready-engineer".to_string(),
            stage: Some(Stage::Portfolio),
            audiences: vec![Audience::Engineering],
            status: CourseStatus::Live,
            title: "AI-Ready Engineer".to_string(),
            tagline: "Get hired in the AI era - before your batchmates figure out what's happening"
                .to_string(),
            duration: "2 weeks".to_string(),
            hours: "8 live hours + 4 project hours".to_string(),
            ideal_for: "Final-year students & fresh graduates preparing for placements".to_string(),
            weeks: strings(&[
                "Session 1: How AI Systems Actually Work - LLMs, embeddings, RAG, agents, and tracing a real query end-to-end",
                "Session 2: Build Part 1 - Core Document Intelligence Bot, deployed to a public URL",
                "Session 3: Build Part 2 - multi-document support, conversation memory, confidence scoring, web interface",
                "Session 4: Architecture Discussion & Project Defence - team presentations and the 10 RAG interview questions",
            ]),
            projects: strings(&[
                "Document Intelligence Bot - upload any PDF, ask questions, get precise referenced answers using RAG architecture (deployed)",
            ]),
            who_for: strings(&[
                "Final-year students or recent graduates with basic Python skills",
                "Students with placements coming who want to stand out with a real AI project",
                "Anyone willing to put in 12 focused hours across 2 weeks to build something demoable",
            ]),
            cta_primary: "Enroll Now".to_string(),
            cta_secondary: "Request Details".to_string(),
            faqs: vec![
                faq(
                    "Do I need prior AI or ML experience?",
                    "No. You need basic Python knowledge - the program teaches LLMs, embeddings, RAG, and agents from scratch in Session 1 before you build anything.",
                ),
                faq(
                    "How is this different from the 6-week AI Engineering course?",
                    "This is a focused 2-week sprint designed for students facing imminent placements. The 6-week course goes deeper into agents and frameworks.",
                ),
            ],
        },
        Course {
            slug: "ai-engineering-agentic-foundations".to_string(),
            stage: Some(Stage::Production),
            audiences: vec![Audience::Engineering],
            status: CourseStatus::Live,
            title: "AI Engineering & Agentic Foundations".to_string(),
            tagline: "Build production-ready AI agents in 6 weeks".to_string(),
            duration: "6 weeks".to_string(),
            hours: "24 live hours + 24 project hours".to_string(),
            ideal_for: "Final-year students & working professionals adding AI skills".to_string(),
            weeks: strings(&[
                "Week 1: How LLMs Actually Work",
                "Week 2: APIs & Embeddings",
                "Week 3: Prompt Engineering as a Discipline",
                "Week 4: Building RAG Pipelines",
                "Week 5: Agents from First Principles",
                "Week 6: Agent Frameworks (LangGraph) & Production",
            ]),
            projects: strings(&[
                "RAG chatbot with custom knowledge base (deployed)",
                "AI agent with tool orchestration (deployed)",
            ]),
            who_for: strings(&[
                "Final-year students who need an AI edge in campus interviews",
                "Engineers who want to add agentic AI skills quickly",
                "Anyone who needs to build and demo AI systems fast",
            ]),
            cta_primary: "Enroll in Next Batch".to_string(),
            cta_secondary: "Download Syllabus".to_string(),
            faqs: vec![
                faq(
                    "Do I need ML experience to start?",
                    "No. This course assumes basic Python knowledge but teaches LLMs, embeddings, and agents from the ground up. If you want to learn ML from scratch, the 16-week program is better.",
                ),
                faq(
                    "How much time per week does this require?",
                    "About 8 hours per week - 4 hours of live sessions and 4 hours of project work.",
                ),
            ],
        },
        Course {
            slug: "ai-foundations-job-ready-16-weeks".to_string(),
            stage: None,
            audiences: vec![Audience::Engineering, Audience::NonTech],
            status: CourseStatus::Live,
            title: "AI Foundations - Job Ready in 16 Weeks".to_string(),
            tagline: "From Python basics to deployed AI systems".to_string(),
            duration: "16 weeks".to_string(),
            hours: "64 live hours + 96 project hours".to_string(),
            ideal_for: "Students with 6+ months runway, career switchers, professionals upskilling"
                .to_string(),
            weeks: strings(&[
                "Phase 1 (Weeks 1-4): Python, ML basics, neural networks from scratch",
                "Phase 2 (Weeks 5-10): LLMs, RAG, AI agents, prompt engineering, fine-tuning",
                "Phase 3 (Weeks 11-14): APIs, deployment, Docker, capstone project",
                "Phase 4 (Weeks 15-16): Portfolio polish, resume prep, mock interviews",
            ]),
            projects: strings(&[
                "Neural network built from scratch (NumPy only)",
                "RAG system for document Q&A",
                "AI agent with real integrations",
                "End-to-end capstone project with real users",
            ]),
            who_for: strings(&[
                "Second/third-year students planning ahead",
                "Working professionals switching to AI careers",
                "Anyone who wants deep foundations, not just surface skills",
            ]),
            cta_primary: "Apply for Next Cohort".to_string(),
            cta_secondary: "Download Full Curriculum".to_string(),
            faqs: vec![
                faq(
                    "Do I need any prior coding experience?",
                    "No. This program starts from Python basics and builds up to deployed AI systems. It's designed for complete beginners and career switchers.",
                ),
                faq(
                    "How much time per week does this require?",
                    "About 10 hours per week - 4 hours of live sessions and 6 hours of project work.",
                ),
            ],
        },
        Course {
            slug: "ai-product-builder".to_string(),
            stage: Some(Stage::Ship),
            audiences: vec![Audience::Engineering, Audience::NonTech],
            status: CourseStatus::PreRegister,
            title: "AI Product Builder".to_string(),
            tagline: "Take an AI product from idea to paying users".to_string(),
            duration: "8 weeks".to_string(),
            hours: "32 live hours + project time".to_string(),
            ideal_for: "Builders with an idea and the drive to ship it".to_string(),
            weeks: strings(&[
                "Weeks 1-2: Idea validation and scoping an AI-native product",
                "Weeks 3-5: Building the core - models, pipelines, product surface",
                "Weeks 6-7: Launch engineering - billing, deployment, observability",
                "Week 8: Go-to-market and first users",
            ]),
            projects: strings(&[
                "A launched AI product with real users - yours",
            ]),
            who_for: strings(&[
                "Professionals who want to ship a product, not just a demo",
                "Founders validating an AI-first idea",
                "Engineers ready to own the whole stack end to end",
            ]),
            cta_primary: "Pre-Register".to_string(),
            cta_secondary: "Suggest a Focus Area".to_string(),
            faqs: vec![
                faq(
                    "When does this course start?",
                    "Dates are not scheduled yet. Pre-register and you'll be the first to know - no payment required.",
                ),
            ],
        },
        Course {
            slug: "executive-ai-strategy".to_string(),
            stage: Some(Stage::Advise),
            audiences: vec![Audience::SeniorIt, Audience::NonTech],
            status: CourseStatus::PreRegister,
            title: "Executive AI Strategy".to_string(),
            tagline: "Lead AI adoption with judgment, not hype".to_string(),
            duration: "3 weeks".to_string(),
            hours: "9 live hours".to_string(),
            ideal_for: "Senior IT leaders and decision-makers steering AI investments".to_string(),
            weeks: strings(&[
                "Week 1: The real AI landscape - capabilities, limits, and cost structures",
                "Week 2: From experimentation to production - what actually breaks",
                "Week 3: Strategy, governance, and building vs. buying",
            ]),
            projects: strings(&[
                "An AI adoption roadmap for your own organisation",
            ]),
            who_for: strings(&[
                "CTOs, VPs, and senior IT managers accountable for AI outcomes",
                "Non-technical leaders who need to evaluate AI claims credibly",
                "Consultants advising clients on AI strategy",
            ]),
            cta_primary: "Pre-Register".to_string(),
            cta_secondary: "Tell Us What You'd Find Valuable".to_string(),
            faqs: vec![
                faq(
                    "Is this technical?",
                    "Conceptually rigorous, but no coding. You'll leave able to interrogate technical proposals, not write them.",
                ),
            ],
        },
    ]
}

pub fn batches() -> Vec<Batch> {
    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        // Seed dates are literals; an out-of-range literal is a typo caught
        // by the catalog tests.
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    vec![
        Batch {
            course_slug: "teen-ai-builders".to_string(),
            course_title: "Teen AI Builders".to_string(),
            label: "Batch 1".to_string(),
            start_date: date(2026, 4, 1),
            days: "Wed & Thu".to_string(),
            time: "11:00 AM - 12:00 PM IST".to_string(),
            duration: "4 weeks".to_string(),
        },
        Batch {
            course_slug: "teen-ai-builders".to_string(),
            course_title: "Teen AI Builders".to_string(),
            label: "Batch 2".to_string(),
            start_date: date(2026, 4, 15),
            days: "Wed & Thu".to_string(),
            time: "4:00 - 5:00 PM IST".to_string(),
            duration: "4 weeks".to_string(),
        },
        Batch {
            course_slug: "ai-engineering-agentic-foundations".to_string(),
            course_title: "AI Engineering & Agentic Foundations".to_string(),
            label: "Next Batch".to_string(),
            start_date: date(2026, 4, 20),
            days: "Mon & Tue".to_string(),
            time: "8:30 - 10:30 PM IST".to_string(),
            duration: "6 weeks".to_string(),
        },
    ]
}

pub fn trainers() -> Vec<Trainer> {
    vec![Trainer {
        slug: "prabhu-eshwarla".to_string(),
        name: "Prabhu Eshwarla".to_string(),
        title: "AI Systems Architect | Author".to_string(),
        bio: strings(&[
            "Prabhu builds AI systems designed for production - and trains engineers to do the same. With over two decades of engineering and leadership across distributed systems, blockchain infrastructure, and enterprise platforms, he now focuses on AI infrastructure, developer tools, and engineering education.",
            "He has held senior leadership roles at Hewlett Packard including heading HP Software services delivery for the India region, and was CTO for a European blockchain startup. A passionate educator at heart, he has authored two technical books.",
            "AI is reshaping careers faster than universities can update their curriculum. Prabhu started GradTensor to bridge that gap - helping final-year students and working professionals build practical AI skills that employers actually need.",
        ]),
        highlights: strings(&[
            "Architects AI infrastructure for security, performance, and cost control",
            "Designs and deploys self-hosted and open-source AI systems",
            "Helps organizations move from AI experimentation to production",
            "Speaker at international tech conferences",
            "2x published author (Manning Publications, Packt)",
        ]),
        books: vec![
            TrainerBook {
                publisher: "Manning".to_string(),
                url: "https://www.amazon.in/Rust-Servers-Services-Prabhu-Eshwarla/dp/1617298603"
                    .to_string(),
            },
            TrainerBook {
                publisher: "Packt".to_string(),
                url: "https://www.amazon.in/Practical-System-Programming-Rust-Developers/dp/1800560966/"
                    .to_string(),
            },
        ],
        links: vec![
            TrainerLink {
                label: "Substack".to_string(),
                url: "https://trustandreason.substack.com".to_string(),
            },
            TrainerLink {
                label: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/peshwarla".to_string(),
            },
        ],
    }]
}

pub fn prices() -> Vec<CoursePrice> {
    fn price(slug: &str, inr: &str, usd: &str) -> CoursePrice {
        CoursePrice {
            course_slug: slug.to_string(),
            inr: inr.to_string(),
            usd: usd.to_string(),
        }
    }

    vec![
        price("teen-ai-builders", "₹8,260", "$99"),
        price("ai-ready-engineer", "Starting at ₹24,780", "Starting at $300"),
        price(
            "ai-engineering-agentic-foundations",
            "Starting at ₹24,780",
            "Starting at $300",
        ),
        price(
            "ai-foundations-job-ready-16-weeks",
            "Starting at ₹54,500",
            "Starting at $660",
        ),
        // Pre-register courses are priced at launch; executive-ai-strategy
        // is custom-quoted and intentionally absent.
    ]
}
