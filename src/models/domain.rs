use serde::{Deserialize, Serialize};
use validator::Validate;

/// How the student is feeling at the time of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalState {
    Happy,
    Neutral,
    Stressed,
}

/// Part of the day a student or mentor is available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Academic performance band, used both for students and for the band a
/// mentor focuses on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    Excellent,
    Good,
    Challenging,
}

/// Classroom management style of a mentor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorManagement {
    Strict,
    Balanced,
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
}

/// Student profile as held by the student directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StudentProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub emotional_state: EmotionalState,
    #[validate(length(min = 1))]
    pub subject_need: String,
    pub available_time: TimeSlot,
    pub region: String,
    pub language: String,
    pub performance_level: PerformanceLevel,
    pub behavior: Behavior,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<LearningStyle>,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl StudentProfile {
    pub fn is_stressed(&self) -> bool {
        self.emotional_state == EmotionalState::Stressed
    }
}

/// Mentor catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MentorProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[validate(length(min = 1))]
    pub expertise: Vec<String>,
    pub specialization: Vec<String>,
    pub available_time: Vec<TimeSlot>,
    pub region: Vec<String>,
    pub language: Vec<String>,
    pub experience_years: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_style: Option<String>,
    pub student_performance_focus: PerformanceLevel,
    pub behavior_management: BehaviorManagement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl MentorProfile {
    pub fn teaches(&self, subject: &str) -> bool {
        self.expertise.iter().any(|s| s == subject)
    }

    /// True if any specialization topic contains `subject` as a substring,
    /// e.g. "ancient history" for "history"
    pub fn specializes_in(&self, subject: &str) -> bool {
        self.specialization.iter().any(|topic| topic.contains(subject))
    }

    pub fn available_at(&self, slot: TimeSlot) -> bool {
        self.available_time.contains(&slot)
    }

    pub fn serves_region(&self, region: &str) -> bool {
        self.region.iter().any(|r| r == region)
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.language.iter().any(|l| l == language)
    }
}

/// Mentor paired with its compatibility score for one student
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMentor {
    pub mentor: MentorProfile,
    pub score: u32,
}
