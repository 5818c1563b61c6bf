// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod exam_tests;
mod student_tests;

use crate::SqlitePersistence;
use timetable_domain::{ExamSession, ExamType, Student};

/// Creates an empty in-memory persistence instance.
pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Creates a test student with the given id.
pub fn create_test_student(student_id: &str) -> Student {
    Student {
        student_id: String::from(student_id),
        student_name: String::from("Alice Chen"),
        english_class_name: String::from("G3 Pioneers"),
        home_room_class_name: String::from("301"),
        ev_myreading_class_name: Some(String::from("G3 Readers")),
    }
}

/// Creates a test exam session for the given grade band.
pub fn create_test_session(grade_band: &str) -> ExamSession {
    ExamSession {
        id: None,
        grade_band: String::from(grade_band),
        exam_type: ExamType::Lt,
        grade: String::from("G1"),
        exam_date: String::from("2025-11-04"),
        periods: String::from("P3-P4"),
        duration: 60,
        self_study_time: None,
        preparation_time: String::from("08:25-08:30"),
        exam_time: String::from("08:30-09:30"),
        subject: String::from("LT Assessment"),
    }
}
