use crate::models::{
    Behavior, BehaviorManagement, EmotionalState, MentorProfile, PerformanceLevel, StudentProfile,
};
use serde::Serialize;

pub const SUBJECT_POINTS: u32 = 3;
pub const SPECIALIZATION_POINTS: u32 = 1;
pub const TIME_POINTS: u32 = 2;
pub const REGION_POINTS: u32 = 1;
pub const LANGUAGE_POINTS: u32 = 1;
pub const PERFORMANCE_EXACT_POINTS: u32 = 3;
pub const PERFORMANCE_PARTIAL_POINTS: u32 = 1;
pub const BEHAVIOR_POINTS: u32 = 2;
pub const STRESSED_BALANCED_POINTS: u32 = 2;
pub const STRESSED_OTHER_POINTS: u32 = 1;
pub const SENIOR_EXPERIENCE_POINTS: u32 = 2;
pub const EXPERIENCE_POINTS: u32 = 1;

pub const SENIOR_EXPERIENCE_YEARS: u32 = 15;
pub const EXPERIENCE_YEARS: u32 = 10;

/// Highest score any student/mentor pair can reach
pub const MAX_SCORE: u32 = SUBJECT_POINTS
    + SPECIALIZATION_POINTS
    + TIME_POINTS
    + REGION_POINTS
    + LANGUAGE_POINTS
    + PERFORMANCE_EXACT_POINTS
    + BEHAVIOR_POINTS
    + STRESSED_BALANCED_POINTS
    + SENIOR_EXPERIENCE_POINTS;

/// Points contributed by each matching factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub subject: u32,
    pub specialization: u32,
    pub time: u32,
    pub region: u32,
    pub language: u32,
    pub performance: u32,
    pub behavior: u32,
    pub emotional: u32,
    pub experience: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.subject
            + self.specialization
            + self.time
            + self.region
            + self.language
            + self.performance
            + self.behavior
            + self.emotional
            + self.experience
    }
}

/// Calculate the compatibility score (0-17) between a student and a mentor
///
/// Scoring table:
/// ```text
/// subject in expertise                 +3
///   and a specialization contains it   +1
/// time slot available                  +2
/// region served                        +1
/// language spoken                      +1
/// performance exact / adjacent         +3 / +1
/// behavior matches management style    +2
/// stressed: balanced / other mentor    +2 / +1
/// experience >= 15 / >= 10 years       +2 / +1
/// ```
#[inline]
pub fn score_match(student: &StudentProfile, mentor: &MentorProfile) -> u32 {
    calculate_breakdown(student, mentor).total()
}

/// Per-factor points behind [`score_match`]
pub fn calculate_breakdown(student: &StudentProfile, mentor: &MentorProfile) -> ScoreBreakdown {
    let subject_matched = mentor.teaches(&student.subject_need);

    ScoreBreakdown {
        subject: if subject_matched { SUBJECT_POINTS } else { 0 },
        // Only counted on top of a subject match
        specialization: if subject_matched && mentor.specializes_in(&student.subject_need) {
            SPECIALIZATION_POINTS
        } else {
            0
        },
        time: if mentor.available_at(student.available_time) { TIME_POINTS } else { 0 },
        region: if mentor.serves_region(&student.region) { REGION_POINTS } else { 0 },
        language: if mentor.speaks(&student.language) { LANGUAGE_POINTS } else { 0 },
        performance: performance_points(
            student.performance_level,
            mentor.student_performance_focus,
        ),
        behavior: behavior_points(student.behavior, mentor.behavior_management),
        emotional: emotional_points(student.emotional_state, mentor.behavior_management),
        experience: experience_points(mentor.experience_years),
    }
}

/// Exact band match, or a partial match for bands one step apart
#[inline]
fn performance_points(student: PerformanceLevel, focus: PerformanceLevel) -> u32 {
    use PerformanceLevel::*;

    match (student, focus) {
        (s, f) if s == f => PERFORMANCE_EXACT_POINTS,
        (High, Medium) | (Medium, High) | (Medium, Low) | (Low, Medium) => {
            PERFORMANCE_PARTIAL_POINTS
        }
        _ => 0,
    }
}

#[inline]
fn behavior_points(behavior: Behavior, management: BehaviorManagement) -> u32 {
    match (behavior, management) {
        (Behavior::Challenging, BehaviorManagement::Strict)
        | (Behavior::Good, BehaviorManagement::Balanced)
        | (Behavior::Excellent, BehaviorManagement::Lenient) => BEHAVIOR_POINTS,
        _ => 0,
    }
}

/// Stressed students get a bump with every mentor, larger with balanced ones
#[inline]
fn emotional_points(state: EmotionalState, management: BehaviorManagement) -> u32 {
    match (state, management) {
        (EmotionalState::Stressed, BehaviorManagement::Balanced) => STRESSED_BALANCED_POINTS,
        (EmotionalState::Stressed, _) => STRESSED_OTHER_POINTS,
        _ => 0,
    }
}

#[inline]
fn experience_points(years: u32) -> u32 {
    if years >= SENIOR_EXPERIENCE_YEARS {
        SENIOR_EXPERIENCE_POINTS
    } else if years >= EXPERIENCE_YEARS {
        EXPERIENCE_POINTS
    } else {
        0
    }
}
