// Model exports
pub mod domain;
pub mod responses;

pub use domain::{
    Behavior, BehaviorManagement, EmotionalState, LearningStyle, MentorProfile, PerformanceLevel,
    ScoredMentor, StudentProfile, TimeSlot,
};
pub use responses::{ApiInfoResponse, ErrorResponse, HealthResponse};
