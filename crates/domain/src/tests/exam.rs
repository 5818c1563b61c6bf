// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ClassExamInfo, DomainError, ExamType, parse_exam_date, validate_assignment_fields,
};

#[test]
fn test_exam_type_parse_round_trip() {
    assert_eq!(ExamType::parse("LT").unwrap(), ExamType::Lt);
    assert_eq!(ExamType::parse("IT").unwrap(), ExamType::It);
    assert_eq!(ExamType::Lt.as_str(), "LT");
    assert_eq!(ExamType::It.as_str(), "IT");
}

#[test]
fn test_unknown_exam_type_is_rejected() {
    let result: Result<ExamType, DomainError> = ExamType::parse("MIDTERM");
    assert!(matches!(result, Err(DomainError::InvalidExamType(_))));
}

#[test]
fn test_parse_exam_date_accepts_iso_dates() {
    let date: time::Date = parse_exam_date("2025-11-04").unwrap();
    assert_eq!(date.year(), 2025);
    assert_eq!(u8::from(date.month()), 11);
    assert_eq!(date.day(), 4);
}

#[test]
fn test_parse_exam_date_rejects_garbage() {
    let result: Result<time::Date, DomainError> = parse_exam_date("11/04/2025");
    assert!(matches!(
        result,
        Err(DomainError::ExamDateParseError { .. })
    ));

    let result: Result<time::Date, DomainError> = parse_exam_date("2025-13-40");
    assert!(result.is_err());
}

#[test]
fn test_head_count_is_students_plus_proctor() {
    let info: ClassExamInfo = ClassExamInfo {
        id: Some(1),
        class_name: String::from("G1 Achievers"),
        grade: String::from("G1"),
        level: String::from("G1E1"),
        exam_session_id: 1,
        students: 24,
        teacher: Some(String::from("張家芸 Kenny")),
    };

    assert_eq!(info.head_count(), 25);
}

#[test]
fn test_assignment_fields_must_be_non_empty() {
    assert!(validate_assignment_fields("張家芸 Kenny", "E101").is_ok());

    let missing_teacher: Result<(), DomainError> = validate_assignment_fields("  ", "E101");
    assert!(matches!(
        missing_teacher,
        Err(DomainError::InvalidProctorTeacher(_))
    ));

    let missing_room: Result<(), DomainError> = validate_assignment_fields("Kenny", "");
    assert!(matches!(
        missing_room,
        Err(DomainError::InvalidExamClassroom(_))
    ));
}

#[test]
fn test_exam_type_serde_wire_names() {
    let lt: String = serde_json::to_string(&ExamType::Lt).unwrap();
    assert_eq!(lt, "\"LT\"");

    let it: ExamType = serde_json::from_str("\"IT\"").unwrap();
    assert_eq!(it, ExamType::It);
}
