use crate::config::CatalogSettings;
use crate::models::{MentorProfile, StudentProfile};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

const BUILTIN_STUDENTS: &str = include_str!("../../data/students.json");
const BUILTIN_MENTORS: &str = include_str!("../../data/mentors.json");

/// Errors that can occur when loading or reading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {kind} {id}: {errors}")]
    Invalid {
        kind: &'static str,
        id: String,
        errors: validator::ValidationErrors,
    },

    #[error("Duplicate {kind} ID: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Mentor catalog is empty")]
    EmptyMentors,
}

/// Lookup of students by identifier
pub trait StudentDirectory: Send + Sync {
    fn find_by_id(&self, id: &str) -> Result<Option<StudentProfile>, CatalogError>;
}

/// Source of every mentor available for matching, in catalog order
pub trait MentorDirectory: Send + Sync {
    fn list_all(&self) -> Result<Vec<MentorProfile>, CatalogError>;
}

/// Read-only in-memory student and mentor catalog
///
/// Records are validated once at construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    students: Vec<StudentProfile>,
    mentors: Vec<MentorProfile>,
}

impl Catalog {
    /// Build a catalog, validating every record
    pub fn new(
        students: Vec<StudentProfile>,
        mentors: Vec<MentorProfile>,
    ) -> Result<Self, CatalogError> {
        if mentors.is_empty() {
            return Err(CatalogError::EmptyMentors);
        }

        let mut seen = HashSet::new();
        for student in &students {
            student.validate().map_err(|errors| CatalogError::Invalid {
                kind: "student",
                id: student.id.clone(),
                errors,
            })?;
            if !seen.insert(student.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "student",
                    id: student.id.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for mentor in &mentors {
            mentor.validate().map_err(|errors| CatalogError::Invalid {
                kind: "mentor",
                id: mentor.id.clone(),
                errors,
            })?;
            if !seen.insert(mentor.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    kind: "mentor",
                    id: mentor.id.clone(),
                });
            }
        }

        Ok(Self { students, mentors })
    }

    /// Catalog bundled with the binary (data/students.json, data/mentors.json)
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_STUDENTS, BUILTIN_MENTORS)
    }

    /// Parse a catalog from two JSON arrays
    pub fn from_json(students_json: &str, mentors_json: &str) -> Result<Self, CatalogError> {
        Self::new(
            serde_json::from_str(students_json)?,
            serde_json::from_str(mentors_json)?,
        )
    }

    /// Load a catalog from two JSON files
    pub fn from_files<P: AsRef<Path>>(
        students_path: P,
        mentors_path: P,
    ) -> Result<Self, CatalogError> {
        Self::new(read_json(students_path.as_ref())?, read_json(mentors_path.as_ref())?)
    }

    /// Load a catalog as configured, falling back to the built-in fixtures
    /// for any list without a configured path
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let students = match &settings.students_path {
            Some(path) => read_json(path)?,
            None => serde_json::from_str(BUILTIN_STUDENTS)?,
        };
        let mentors = match &settings.mentors_path {
            Some(path) => read_json(path)?,
            None => serde_json::from_str(BUILTIN_MENTORS)?,
        };

        Self::new(students, mentors)
    }

    pub fn students(&self) -> &[StudentProfile] {
        &self.students
    }

    pub fn mentors(&self) -> &[MentorProfile] {
        &self.mentors
    }
}

impl StudentDirectory for Catalog {
    fn find_by_id(&self, id: &str) -> Result<Option<StudentProfile>, CatalogError> {
        Ok(self.students.iter().find(|s| s.id == id).cloned())
    }
}

impl MentorDirectory for Catalog {
    fn list_all(&self) -> Result<Vec<MentorProfile>, CatalogError> {
        Ok(self.mentors.clone())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!("Loaded catalog file {}", path.display());

    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.students().len(), 8);
        assert_eq!(catalog.mentors().len(), 5);
        assert_eq!(catalog.mentors()[0].id, "M001");
        assert_eq!(catalog.mentors()[4].id, "M005");
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin().unwrap();

        let student = catalog.find_by_id("S003").unwrap().unwrap();
        assert_eq!(student.name, "Vikram Mehta");
        assert!(catalog.find_by_id("S999").unwrap().is_none());
        // Identifiers are matched exactly
        assert!(catalog.find_by_id("s003").unwrap().is_none());
    }

    #[test]
    fn test_list_all_preserves_catalog_order() {
        let catalog = Catalog::builtin().unwrap();

        let ids: Vec<String> = catalog.list_all().unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["M001", "M002", "M003", "M004", "M005"]);
    }

    #[test]
    fn test_empty_mentor_catalog_rejected() {
        let result = Catalog::from_json("[]", "[]");
        assert!(matches!(result, Err(CatalogError::EmptyMentors)));
    }

    #[test]
    fn test_duplicate_mentor_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut mentors = catalog.mentors().to_vec();
        mentors.push(mentors[0].clone());

        let result = Catalog::new(catalog.students().to_vec(), mentors);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateId { kind: "mentor", ref id }) if id == "M001"
        ));
    }

    #[test]
    fn test_mentor_without_expertise_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let mut mentors = catalog.mentors().to_vec();
        mentors[2].expertise.clear();

        let result = Catalog::new(vec![], mentors);
        assert!(matches!(result, Err(CatalogError::Invalid { kind: "mentor", .. })));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let result = Catalog::from_files("does/not/exist.json", "does/not/exist.json");

        match result {
            Err(CatalogError::Io { path, .. }) => assert!(path.contains("exist.json")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_settings_without_paths_use_builtin() {
        let catalog = Catalog::from_settings(&CatalogSettings::default()).unwrap();
        assert_eq!(catalog.mentors().len(), 5);
    }

    #[test]
    fn test_mentor_missing_scoring_fields_rejected() {
        let mentors = r#"[{
            "id": "M1",
            "expertise": ["math"],
            "student_performance_focus": "high",
            "behavior_management": "strict"
        }]"#;

        let result = Catalog::from_json("[]", mentors);
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_mentor_missing_experience_rejected() {
        let mentors = r#"[{
            "id": "M1",
            "expertise": ["math"],
            "specialization": ["algebra"],
            "available_time": ["morning"],
            "region": ["punjab"],
            "language": ["punjabi"],
            "student_performance_focus": "high",
            "behavior_management": "strict"
        }]"#;

        let err = Catalog::from_json("[]", mentors).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().contains("experience_years"));
    }

    fn write_temp_json(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("mentor-match-{}-{}.json", name, uuid::Uuid::new_v4());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn single_mentor_json() -> String {
        let catalog = Catalog::builtin().unwrap();
        serde_json::to_string(&catalog.mentors()[2..3]).unwrap()
    }

    #[test]
    fn test_from_files_loads_catalog() {
        let builtin = Catalog::builtin().unwrap();
        let students = write_temp_json(
            "students",
            &serde_json::to_string(&builtin.students()[..2]).unwrap(),
        );
        let mentors = write_temp_json("mentors", &single_mentor_json());

        let result = Catalog::from_files(&students, &mentors);
        std::fs::remove_file(&students).ok();
        std::fs::remove_file(&mentors).ok();

        let catalog = result.unwrap();
        assert_eq!(catalog.students().len(), 2);
        assert_eq!(catalog.students()[1].id, "S002");
        assert_eq!(catalog.mentors().len(), 1);
        assert_eq!(catalog.mentors()[0].id, "M003");
    }

    #[test]
    fn test_settings_with_mentor_path_keep_builtin_students() {
        let mentors = write_temp_json("mentors", &single_mentor_json());
        let settings = CatalogSettings {
            students_path: None,
            mentors_path: Some(mentors.clone()),
        };

        let result = Catalog::from_settings(&settings);
        std::fs::remove_file(&mentors).ok();

        let catalog = result.unwrap();
        assert_eq!(catalog.students().len(), 8);
        let ids: Vec<&str> = catalog.mentors().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["M003"]);
    }

    #[test]
    fn test_settings_with_invalid_file_rejected() {
        let students = write_temp_json("students", "{ not json");
        let settings = CatalogSettings {
            students_path: Some(students.clone()),
            mentors_path: None,
        };

        let result = Catalog::from_settings(&settings);
        std::fs::remove_file(&students).ok();

        assert!(matches!(result, Err(CatalogError::Json(_))));
    }
}
