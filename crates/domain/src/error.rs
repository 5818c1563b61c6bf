// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A weekday string is not one of Monday through Friday.
    InvalidWeekday(String),
    /// A category string is not one of the known categories.
    InvalidCategory(String),
    /// An exam type string is not one of the known exam types.
    InvalidExamType(String),
    /// Student identifier is empty or invalid.
    InvalidStudentId(String),
    /// Student name is empty or invalid.
    InvalidStudentName(String),
    /// Class name is empty or invalid.
    InvalidClassName(String),
    /// Period number is outside the valid range.
    InvalidPeriod(&'static str),
    /// Proctor teacher field is empty or invalid.
    InvalidProctorTeacher(&'static str),
    /// Exam classroom field is empty or invalid.
    InvalidExamClassroom(&'static str),
    /// Failed to parse an exam date from a string.
    ExamDateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Student not found.
    StudentNotFound(String),
    /// Teacher not found.
    TeacherNotFound(String),
    /// Class not found.
    ClassNotFound(String),
    /// Grade band not found.
    GradeBandNotFound(String),
    /// Exam session not found.
    ExamSessionNotFound(i64),
    /// Class exam info record not found.
    ClassExamInfoNotFound(i64),
    /// Proctor assignment not found.
    ProctorAssignmentNotFound(i64),
    /// A class already has a proctor assignment.
    DuplicateProctorAssignment {
        /// The class exam info record that already carries an assignment.
        class_exam_info_id: i64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWeekday(value) => {
                write!(f, "Invalid weekday '{value}': must be Monday through Friday")
            }
            Self::InvalidCategory(msg) => write!(f, "Invalid category: {msg}"),
            Self::InvalidExamType(msg) => write!(f, "Invalid exam type: {msg}"),
            Self::InvalidStudentId(msg) => write!(f, "Invalid student id: {msg}"),
            Self::InvalidStudentName(msg) => write!(f, "Invalid student name: {msg}"),
            Self::InvalidClassName(msg) => write!(f, "Invalid class name: {msg}"),
            Self::InvalidPeriod(msg) => write!(f, "Invalid period: {msg}"),
            Self::InvalidProctorTeacher(msg) => write!(f, "Invalid proctor teacher: {msg}"),
            Self::InvalidExamClassroom(msg) => write!(f, "Invalid exam classroom: {msg}"),
            Self::ExamDateParseError { date_string, error } => {
                write!(f, "Failed to parse exam date '{date_string}': {error}")
            }
            Self::StudentNotFound(student_id) => {
                write!(f, "Student '{student_id}' not found")
            }
            Self::TeacherNotFound(teacher_name) => {
                write!(f, "Teacher '{teacher_name}' not found")
            }
            Self::ClassNotFound(class_name) => {
                write!(f, "Class '{class_name}' not found")
            }
            Self::GradeBandNotFound(grade_band) => {
                write!(f, "Grade band '{grade_band}' not found")
            }
            Self::ExamSessionNotFound(id) => write!(f, "Exam session {id} not found"),
            Self::ClassExamInfoNotFound(id) => {
                write!(f, "Class exam info {id} not found")
            }
            Self::ProctorAssignmentNotFound(id) => {
                write!(f, "Proctor assignment {id} not found")
            }
            Self::DuplicateProctorAssignment { class_exam_info_id } => {
                write!(
                    f,
                    "Class exam info {class_exam_info_id} already has a proctor assignment"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
