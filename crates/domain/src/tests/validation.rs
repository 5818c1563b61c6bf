// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CourseRow, DomainError, Student, Weekday, validate_course_row, validate_student_fields,
};

fn create_test_student() -> Student {
    Student {
        student_id: String::from("S1001"),
        student_name: String::from("Alice Chen"),
        english_class_name: String::from("G3 Pioneers"),
        home_room_class_name: String::from("301"),
        ev_myreading_class_name: Some(String::from("G3 Readers")),
    }
}

fn create_test_course_row() -> CourseRow {
    CourseRow {
        day: Weekday::Monday,
        period: 1,
        time: String::from("8:25-9:05"),
        classroom: String::from("E101"),
        teacher: String::from("張家芸 Kenny"),
        class_name: String::from("G1 Visionaries"),
    }
}

#[test]
fn test_valid_student_passes() {
    assert!(validate_student_fields(&create_test_student()).is_ok());
}

#[test]
fn test_empty_student_id_is_rejected() {
    let mut student: Student = create_test_student();
    student.student_id = String::new();

    let result: Result<(), DomainError> = validate_student_fields(&student);
    assert!(matches!(result, Err(DomainError::InvalidStudentId(_))));
}

#[test]
fn test_empty_student_name_is_rejected() {
    let mut student: Student = create_test_student();
    student.student_name = String::from("   ");

    let result: Result<(), DomainError> = validate_student_fields(&student);
    assert!(matches!(result, Err(DomainError::InvalidStudentName(_))));
}

#[test]
fn test_missing_class_names_are_rejected() {
    let mut student: Student = create_test_student();
    student.english_class_name = String::new();
    assert!(matches!(
        validate_student_fields(&student),
        Err(DomainError::InvalidClassName(_))
    ));

    let mut student: Student = create_test_student();
    student.home_room_class_name = String::new();
    assert!(matches!(
        validate_student_fields(&student),
        Err(DomainError::InvalidClassName(_))
    ));
}

#[test]
fn test_missing_enrichment_class_is_allowed() {
    let mut student: Student = create_test_student();
    student.ev_myreading_class_name = None;

    assert!(validate_student_fields(&student).is_ok());
}

#[test]
fn test_valid_course_row_passes() {
    assert!(validate_course_row(&create_test_course_row()).is_ok());
}

#[test]
fn test_zero_period_is_rejected() {
    let mut row: CourseRow = create_test_course_row();
    row.period = 0;

    let result: Result<(), DomainError> = validate_course_row(&row);
    assert!(matches!(result, Err(DomainError::InvalidPeriod(_))));
}

#[test]
fn test_course_row_needs_class_name() {
    let mut row: CourseRow = create_test_course_row();
    row.class_name = String::new();

    let result: Result<(), DomainError> = validate_course_row(&row);
    assert!(matches!(result, Err(DomainError::InvalidClassName(_))));
}
