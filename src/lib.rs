//! Mentor Match - mentor matching service for the learning platform
//!
//! This library ranks a fixed mentor catalog against a student profile
//! using a deterministic, additive point score and returns the best match
//! together with the runner-ups.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{rank_mentors, score_match, MatchError, MatchResult, Matcher, MAX_SCORE};
pub use models::{MentorProfile, ScoredMentor, StudentProfile};
pub use services::{Catalog, CatalogError, MentorDirectory, StudentDirectory};
