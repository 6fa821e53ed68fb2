use crate::core::scoring::calculate_breakdown;
use crate::models::{MentorProfile, ScoredMentor, StudentProfile};
use crate::services::{Catalog, CatalogError, MentorDirectory, StudentDirectory};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Number of runner-up mentors returned by default
pub const DEFAULT_ALTERNATIVES: usize = 2;

/// Upper bound on runner-ups; a match never returns more than two
pub const MAX_ALTERNATIVES: usize = 2;

/// Errors that can occur while matching a student
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Student with ID {0} not found")]
    StudentNotFound(String),

    #[error("No mentors available for matching")]
    NoMentors,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result of matching one student against the mentor catalog
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub student: StudentProfile,
    pub best_match: MentorProfile,
    pub alternatives: Vec<MentorProfile>,
}

/// Score every mentor for a student and sort by score, highest first
///
/// The sort is stable, so mentors with equal scores keep their catalog order.
pub fn rank_mentors(student: &StudentProfile, mentors: Vec<MentorProfile>) -> Vec<ScoredMentor> {
    let mut scored: Vec<ScoredMentor> = mentors
        .into_iter()
        .map(|mentor| {
            let breakdown = calculate_breakdown(student, &mentor);
            tracing::debug!(
                "Scored mentor {} for student {}: {} ({:?})",
                mentor.id,
                student.id,
                breakdown.total(),
                breakdown
            );

            ScoredMentor {
                score: breakdown.total(),
                mentor,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Mentor matching orchestrator
///
/// Holds read-only handles to the student and mentor directories; cloning is
/// cheap and clones share the same directories.
///
/// # Pipeline
/// 1. Student lookup
/// 2. Scoring of every mentor
/// 3. Stable ranking by score
/// 4. Best match plus runner-ups
#[derive(Clone)]
pub struct Matcher {
    students: Arc<dyn StudentDirectory>,
    mentors: Arc<dyn MentorDirectory>,
    alternatives: usize,
}

impl Matcher {
    pub fn new(students: Arc<dyn StudentDirectory>, mentors: Arc<dyn MentorDirectory>) -> Self {
        Self {
            students,
            mentors,
            alternatives: DEFAULT_ALTERNATIVES,
        }
    }

    /// Matcher over a single catalog serving both students and mentors
    pub fn from_catalog(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog.clone(), catalog)
    }

    /// Set the number of runner-ups, capped at `MAX_ALTERNATIVES`
    pub fn with_alternatives(mut self, alternatives: usize) -> Self {
        self.alternatives = alternatives.min(MAX_ALTERNATIVES);
        self
    }

    pub fn alternatives(&self) -> usize {
        self.alternatives
    }

    /// Number of mentors currently available to the matcher
    pub fn mentor_count(&self) -> Result<usize, CatalogError> {
        Ok(self.mentors.list_all()?.len())
    }

    /// Find the best mentor and runner-ups for a student
    ///
    /// # Arguments
    /// * `student_id` - Identifier looked up in the student directory
    ///
    /// # Returns
    /// The student record, the highest scoring mentor and up to
    /// `alternatives` further mentors in score order
    pub fn match_mentors(&self, student_id: &str) -> Result<MatchResult, MatchError> {
        let student = self
            .students
            .find_by_id(student_id)?
            .ok_or_else(|| MatchError::StudentNotFound(student_id.to_string()))?;

        let mentors = self.mentors.list_all()?;
        let total_mentors = mentors.len();

        let mut ranked = rank_mentors(&student, mentors).into_iter();

        let best = ranked.next().ok_or(MatchError::NoMentors)?;
        let alternatives: Vec<MentorProfile> = ranked
            .take(self.alternatives)
            .map(|scored| scored.mentor)
            .collect();

        tracing::info!(
            "Matched student {} with mentor {} (score {}, {} alternatives, {} mentors scored)",
            student.id,
            best.mentor.id,
            best.score,
            alternatives.len(),
            total_mentors
        );

        Ok(MatchResult {
            student,
            best_match: best.mentor,
            alternatives,
        })
    }
}
