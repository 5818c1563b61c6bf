// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_persistence, create_test_student};
use crate::{PersistenceError, SqlitePersistence};
use timetable_domain::Student;

#[test]
fn test_insert_and_get_student() {
    let persistence: SqlitePersistence = create_test_persistence();
    let student: Student = create_test_student("S1001");

    persistence.insert_student(&student).unwrap();

    let fetched: Option<Student> = persistence.get_student("S1001").unwrap();
    assert_eq!(fetched, Some(student));
}

#[test]
fn test_get_missing_student_returns_none() {
    let persistence: SqlitePersistence = create_test_persistence();

    let fetched: Option<Student> = persistence.get_student("S9999").unwrap();
    assert!(fetched.is_none());
}

#[test]
fn test_list_students_is_ordered_by_id() {
    let persistence: SqlitePersistence = create_test_persistence();
    persistence
        .insert_student(&create_test_student("S2000"))
        .unwrap();
    persistence
        .insert_student(&create_test_student("S1000"))
        .unwrap();
    persistence
        .insert_student(&create_test_student("S1500"))
        .unwrap();

    let students: Vec<Student> = persistence.list_students().unwrap();

    let ids: Vec<&str> = students.iter().map(|s| s.student_id.as_str()).collect();
    assert_eq!(ids, vec!["S1000", "S1500", "S2000"]);
}

#[test]
fn test_duplicate_student_id_is_a_constraint_violation() {
    let persistence: SqlitePersistence = create_test_persistence();
    persistence
        .insert_student(&create_test_student("S1001"))
        .unwrap();

    let result: Result<(), PersistenceError> =
        persistence.insert_student(&create_test_student("S1001"));

    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_student_without_enrichment_class_round_trips() {
    let persistence: SqlitePersistence = create_test_persistence();
    let mut student: Student = create_test_student("S1001");
    student.ev_myreading_class_name = None;

    persistence.insert_student(&student).unwrap();

    let fetched: Option<Student> = persistence.get_student("S1001").unwrap();
    assert_eq!(fetched, Some(student));
}
