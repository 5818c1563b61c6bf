// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use timetable_domain::DomainError;
use timetable_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidWeekday(value) => ApiError::InvalidInput {
            field: String::from("day"),
            message: format!("'{value}' is not a weekday"),
        },
        DomainError::InvalidCategory(msg) => ApiError::InvalidInput {
            field: String::from("class_type"),
            message: msg,
        },
        DomainError::InvalidExamType(msg) => ApiError::InvalidInput {
            field: String::from("exam_type"),
            message: msg,
        },
        DomainError::InvalidStudentId(msg) => ApiError::InvalidInput {
            field: String::from("student_id"),
            message: msg,
        },
        DomainError::InvalidStudentName(msg) => ApiError::InvalidInput {
            field: String::from("student_name"),
            message: msg,
        },
        DomainError::InvalidClassName(msg) => ApiError::InvalidInput {
            field: String::from("class_name"),
            message: msg,
        },
        DomainError::InvalidPeriod(msg) => ApiError::InvalidInput {
            field: String::from("period"),
            message: msg.to_string(),
        },
        DomainError::InvalidProctorTeacher(msg) => ApiError::InvalidInput {
            field: String::from("proctor_teacher"),
            message: msg.to_string(),
        },
        DomainError::InvalidExamClassroom(msg) => ApiError::InvalidInput {
            field: String::from("classroom"),
            message: msg.to_string(),
        },
        DomainError::ExamDateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("exam_date"),
            message: format!("Failed to parse exam date '{date_string}': {error}"),
        },
        DomainError::StudentNotFound(student_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message: format!("Student '{student_id}' does not exist"),
        },
        DomainError::TeacherNotFound(teacher_name) => ApiError::ResourceNotFound {
            resource_type: String::from("Teacher"),
            message: format!("Teacher '{teacher_name}' does not exist"),
        },
        DomainError::ClassNotFound(class_name) => ApiError::ResourceNotFound {
            resource_type: String::from("Class"),
            message: format!("Class '{class_name}' does not exist"),
        },
        DomainError::GradeBandNotFound(grade_band) => ApiError::ResourceNotFound {
            resource_type: String::from("Grade band"),
            message: format!("Grade band '{grade_band}' does not exist"),
        },
        DomainError::ExamSessionNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Exam session"),
            message: format!("Exam session {id} does not exist"),
        },
        DomainError::ClassExamInfoNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Class exam info"),
            message: format!("Class exam info {id} does not exist"),
        },
        DomainError::ProctorAssignmentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Proctor assignment"),
            message: format!("Proctor assignment {id} does not exist"),
        },
        DomainError::DuplicateProctorAssignment { class_exam_info_id } => {
            ApiError::DomainRuleViolation {
                rule: String::from("one_assignment_per_class"),
                message: format!(
                    "Class exam info {class_exam_info_id} already has a proctor assignment; \
                     use update instead"
                ),
            }
        }
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures persistence errors are not
/// leaked directly.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::ConstraintViolation(msg) => ApiError::DomainRuleViolation {
            rule: String::from("storage_constraint"),
            message: msg,
        },
        PersistenceError::NotFound(msg) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: msg,
        },
        PersistenceError::DatabaseError(msg)
        | PersistenceError::DatabaseConnectionFailed(msg)
        | PersistenceError::QueryFailed(msg)
        | PersistenceError::RowMappingError(msg)
        | PersistenceError::InitializationError(msg) => ApiError::Internal { message: msg },
    }
}
