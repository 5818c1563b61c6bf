// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Exam-proctor assignment domain types.
//!
//! Midterm exams run in grade-band sessions; each class in a session needs
//! exactly one proctor/classroom assignment. Assignments are the only
//! writable records in the system.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Represents an exam type classification.
///
/// Exam types are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamType {
    /// Listening Test assessment.
    #[serde(rename = "LT")]
    Lt,
    /// Integrated Test assessment.
    #[serde(rename = "IT")]
    It,
}

impl ExamType {
    /// Parses an exam type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid exam type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "LT" => Ok(Self::Lt),
            "IT" => Ok(Self::It),
            _ => Err(DomainError::InvalidExamType(format!(
                "Unknown exam type: {s}"
            ))),
        }
    }

    /// Returns the string representation of this exam type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lt => "LT",
            Self::It => "IT",
        }
    }
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One exam session: the timing information for a grade band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSession {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the session has not been persisted yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The unique grade band label (e.g. "G1 LT's").
    pub grade_band: String,
    /// The exam type.
    pub exam_type: ExamType,
    /// The grade (e.g. "G1").
    pub grade: String,
    /// The exam date (ISO 8601 date string, e.g. "2025-11-04").
    pub exam_date: String,
    /// The period span label (e.g. "P3-P4").
    pub periods: String,
    /// Exam duration in minutes.
    pub duration: u32,
    /// Optional self-study window ("10:20-10:35").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_study_time: Option<String>,
    /// Preparation window ("08:25-08:30").
    pub preparation_time: String,
    /// Exam window ("08:30-09:50").
    pub exam_time: String,
    /// Subject label ("LT Assessment" / "IT Assessment").
    pub subject: String,
}

/// One class's exam record, linked to its session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassExamInfo {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the record has not been persisted yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The unique class name (e.g. "G1 Achievers").
    pub class_name: String,
    /// The grade (e.g. "G1").
    pub grade: String,
    /// The level label (e.g. "G1E1").
    pub level: String,
    /// The exam session this class belongs to.
    pub exam_session_id: i64,
    /// Number of students sitting the exam.
    pub students: u32,
    /// The homeroom teacher, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
}

impl ClassExamInfo {
    /// Returns the seat count for the class: students plus the proctor.
    #[must_use]
    pub const fn head_count(&self) -> u32 {
        self.students + 1
    }
}

/// One proctor assignment: exactly one per class exam record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProctorAssignment {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the assignment has not been persisted yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The class exam record this assignment belongs to (unique).
    pub class_exam_info_id: i64,
    /// The assigned proctor.
    pub proctor_teacher: String,
    /// The exam classroom.
    pub classroom: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last-update timestamp (ISO 8601).
    pub updated_at: String,
}

/// Parses an exam date string in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_exam_date(date_string: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(date_string, &format).map_err(|err| DomainError::ExamDateParseError {
        date_string: date_string.to_string(),
        error: err.to_string(),
    })
}

/// Validates the writable fields of a proctor assignment.
///
/// # Errors
///
/// Returns an error if the proctor teacher or classroom is empty.
pub fn validate_assignment_fields(
    proctor_teacher: &str,
    classroom: &str,
) -> Result<(), DomainError> {
    if proctor_teacher.trim().is_empty() {
        return Err(DomainError::InvalidProctorTeacher(
            "Proctor teacher cannot be empty",
        ));
    }
    if classroom.trim().is_empty() {
        return Err(DomainError::InvalidExamClassroom(
            "Exam classroom cannot be empty",
        ));
    }
    Ok(())
}
