// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CourseRow, Student};

/// Validates that a student's basic field constraints are met.
///
/// This function checks that required fields are not empty.
/// It does NOT check for uniqueness (that requires context).
///
/// # Arguments
///
/// * `student` - The student to validate
///
/// # Returns
///
/// * `Ok(())` if the student's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The student id is empty
/// - The student name is empty
/// - The english or homeroom class name is empty
pub fn validate_student_fields(student: &Student) -> Result<(), DomainError> {
    // Rule: student id must not be empty
    if student.student_id.trim().is_empty() {
        return Err(DomainError::InvalidStudentId(String::from(
            "Student id cannot be empty",
        )));
    }

    // Rule: student name must not be empty
    if student.student_name.trim().is_empty() {
        return Err(DomainError::InvalidStudentName(String::from(
            "Student name cannot be empty",
        )));
    }

    // Rule: every student has an english class and a homeroom class
    if student.english_class_name.trim().is_empty() {
        return Err(DomainError::InvalidClassName(String::from(
            "English class name cannot be empty",
        )));
    }
    if student.home_room_class_name.trim().is_empty() {
        return Err(DomainError::InvalidClassName(String::from(
            "Homeroom class name cannot be empty",
        )));
    }

    Ok(())
}

/// Validates a general course timetable row.
///
/// # Errors
///
/// Returns an error if the period number is zero or the class name is
/// empty. The weekday is already constrained by its type.
pub fn validate_course_row(row: &CourseRow) -> Result<(), DomainError> {
    if row.period == 0 {
        return Err(DomainError::InvalidPeriod("Period number must be positive"));
    }

    if row.class_name.trim().is_empty() {
        return Err(DomainError::InvalidClassName(String::from(
            "Class name cannot be empty",
        )));
    }

    Ok(())
}
