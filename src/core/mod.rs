// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::{rank_mentors, MatchError, MatchResult, Matcher, MAX_ALTERNATIVES};
pub use scoring::{calculate_breakdown, score_match, ScoreBreakdown, MAX_SCORE};
