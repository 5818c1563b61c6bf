// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_persistence, create_test_session};
use crate::{PersistenceError, ProctorAssignmentUpdate, SqlitePersistence};
use timetable_domain::{ClassExamInfo, ExamSession, ProctorAssignment};

fn insert_class_for_session(persistence: &SqlitePersistence, session_id: i64) -> i64 {
    persistence
        .insert_class_exam_info(&ClassExamInfo {
            id: None,
            class_name: String::from("G1 Achievers"),
            grade: String::from("G1"),
            level: String::from("G1E1"),
            exam_session_id: session_id,
            students: 24,
            teacher: Some(String::from("Kenny")),
        })
        .unwrap()
}

#[test]
fn test_insert_and_get_exam_session() {
    let persistence: SqlitePersistence = create_test_persistence();

    let id: i64 = persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();

    let session: ExamSession = persistence.get_exam_session(id).unwrap().unwrap();
    assert_eq!(session.id, Some(id));
    assert_eq!(session.grade_band, "G1 LT's");
    assert_eq!(session.exam_date, "2025-11-04");
}

#[test]
fn test_duplicate_grade_band_is_a_constraint_violation() {
    let persistence: SqlitePersistence = create_test_persistence();
    persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();

    let result: Result<i64, PersistenceError> =
        persistence.insert_exam_session(&create_test_session("G1 LT's"));

    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_sessions_by_date_and_distinct_dates() {
    let persistence: SqlitePersistence = create_test_persistence();
    let mut other_day: ExamSession = create_test_session("G2 IT's");
    other_day.exam_date = String::from("2025-11-05");
    persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();
    persistence.insert_exam_session(&other_day).unwrap();

    let on_day: Vec<ExamSession> = persistence.exam_sessions_by_date("2025-11-04").unwrap();
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].grade_band, "G1 LT's");

    let dates: Vec<String> = persistence.list_exam_dates().unwrap();
    assert_eq!(dates, vec!["2025-11-04", "2025-11-05"]);
}

#[test]
fn test_find_session_by_grade_band() {
    let persistence: SqlitePersistence = create_test_persistence();
    persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();

    let found: Option<ExamSession> = persistence
        .find_exam_session_by_grade_band("G1 LT's")
        .unwrap();
    assert!(found.is_some());

    let missing: Option<ExamSession> = persistence
        .find_exam_session_by_grade_band("G9 LT's")
        .unwrap();
    assert!(missing.is_none());
}

#[test]
fn test_class_exam_info_requires_existing_session() {
    let persistence: SqlitePersistence = create_test_persistence();

    let result: Result<i64, PersistenceError> =
        persistence.insert_class_exam_info(&ClassExamInfo {
            id: None,
            class_name: String::from("G1 Achievers"),
            grade: String::from("G1"),
            level: String::from("G1E1"),
            exam_session_id: 999,
            students: 24,
            teacher: None,
        });

    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_class_exam_info_lookup_by_name_and_session() {
    let persistence: SqlitePersistence = create_test_persistence();
    let session_id: i64 = persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();
    let info_id: i64 = insert_class_for_session(&persistence, session_id);

    let by_name: ClassExamInfo = persistence
        .find_class_exam_info_by_name("G1 Achievers")
        .unwrap()
        .unwrap();
    assert_eq!(by_name.id, Some(info_id));

    let for_session: Vec<ClassExamInfo> =
        persistence.class_exam_info_for_session(session_id).unwrap();
    assert_eq!(for_session.len(), 1);
}

#[test]
fn test_create_and_find_proctor_assignment() {
    let persistence: SqlitePersistence = create_test_persistence();
    let session_id: i64 = persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();
    let info_id: i64 = insert_class_for_session(&persistence, session_id);

    let assignment_id: i64 = persistence
        .create_proctor_assignment(info_id, "Ms. Wu", "E101", Some("door duty"))
        .unwrap();

    let assignment: ProctorAssignment = persistence
        .find_assignment_for_class(info_id)
        .unwrap()
        .unwrap();
    assert_eq!(assignment.id, Some(assignment_id));
    assert_eq!(assignment.proctor_teacher, "Ms. Wu");
    assert_eq!(assignment.classroom, "E101");
    assert_eq!(assignment.notes.as_deref(), Some("door duty"));
    assert!(!assignment.created_at.is_empty());
    assert!(!assignment.updated_at.is_empty());
}

#[test]
fn test_second_assignment_for_same_class_is_rejected() {
    let persistence: SqlitePersistence = create_test_persistence();
    let session_id: i64 = persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();
    let info_id: i64 = insert_class_for_session(&persistence, session_id);
    persistence
        .create_proctor_assignment(info_id, "Ms. Wu", "E101", None)
        .unwrap();

    let result: Result<i64, PersistenceError> =
        persistence.create_proctor_assignment(info_id, "Mr. Lee", "E102", None);

    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_partial_update_leaves_other_fields_unchanged() {
    let persistence: SqlitePersistence = create_test_persistence();
    let session_id: i64 = persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();
    let info_id: i64 = insert_class_for_session(&persistence, session_id);
    let assignment_id: i64 = persistence
        .create_proctor_assignment(info_id, "Ms. Wu", "E101", None)
        .unwrap();

    persistence
        .update_proctor_assignment(
            assignment_id,
            &ProctorAssignmentUpdate {
                classroom: Some(String::from("E205")),
                ..ProctorAssignmentUpdate::default()
            },
        )
        .unwrap();

    let assignment: ProctorAssignment = persistence
        .get_proctor_assignment(assignment_id)
        .unwrap()
        .unwrap();
    assert_eq!(assignment.classroom, "E205");
    assert_eq!(assignment.proctor_teacher, "Ms. Wu");
}

#[test]
fn test_update_missing_assignment_is_not_found() {
    let persistence: SqlitePersistence = create_test_persistence();

    let result: Result<(), PersistenceError> = persistence.update_proctor_assignment(
        42,
        &ProctorAssignmentUpdate {
            classroom: Some(String::from("E205")),
            ..ProctorAssignmentUpdate::default()
        },
    );

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_assignment() {
    let persistence: SqlitePersistence = create_test_persistence();
    let session_id: i64 = persistence
        .insert_exam_session(&create_test_session("G1 LT's"))
        .unwrap();
    let info_id: i64 = insert_class_for_session(&persistence, session_id);
    let assignment_id: i64 = persistence
        .create_proctor_assignment(info_id, "Ms. Wu", "E101", None)
        .unwrap();

    persistence
        .delete_proctor_assignment(assignment_id)
        .unwrap();

    assert!(persistence
        .get_proctor_assignment(assignment_id)
        .unwrap()
        .is_none());

    let result: Result<(), PersistenceError> =
        persistence.delete_proctor_assignment(assignment_id);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
