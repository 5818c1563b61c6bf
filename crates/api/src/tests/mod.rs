// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod exam_tests;

use timetable_domain::{
    ClassExamInfo, EnglishLesson, ExamSession, ExamType, HomeroomLesson, ProctorAssignment,
    Student, Weekday,
};

pub fn create_test_student() -> Student {
    Student {
        student_id: String::from("S1001"),
        student_name: String::from("Alice Chen"),
        english_class_name: String::from("G3 Pioneers"),
        home_room_class_name: String::from("301"),
        ev_myreading_class_name: Some(String::from("G3 Readers")),
    }
}

pub fn create_english_lesson(day: Weekday, period: &str, class_name: &str) -> EnglishLesson {
    EnglishLesson {
        day,
        period: String::from(period),
        classroom: String::from("E101"),
        teacher: String::from("Kenny"),
        class_name: String::from(class_name),
    }
}

pub fn create_homeroom_lesson(day: Weekday, period: &str) -> HomeroomLesson {
    HomeroomLesson {
        home_room_class_name: String::from("301"),
        day,
        period: String::from(period),
        classroom: String::from("H301"),
        teacher: String::from("Ms. Wu"),
        course_name: String::from("Mathematics"),
    }
}

pub fn create_test_session(id: i64, grade_band: &str, exam_date: &str) -> ExamSession {
    ExamSession {
        id: Some(id),
        grade_band: String::from(grade_band),
        exam_type: ExamType::Lt,
        grade: String::from("G1"),
        exam_date: String::from(exam_date),
        periods: String::from("P3-P4"),
        duration: 60,
        self_study_time: None,
        preparation_time: String::from("08:25-08:30"),
        exam_time: String::from("08:30-09:30"),
        subject: String::from("LT Assessment"),
    }
}

pub fn create_class_exam_info(id: i64, class_name: &str, exam_session_id: i64) -> ClassExamInfo {
    ClassExamInfo {
        id: Some(id),
        class_name: String::from(class_name),
        grade: String::from("G1"),
        level: String::from("G1E1"),
        exam_session_id,
        students: 24,
        teacher: Some(String::from("Kenny")),
    }
}

pub fn create_assignment(id: i64, class_exam_info_id: i64) -> ProctorAssignment {
    ProctorAssignment {
        id: Some(id),
        class_exam_info_id,
        proctor_teacher: String::from("Ms. Wu"),
        classroom: String::from("E101"),
        notes: None,
        created_at: String::from("2025-10-01 08:00:00"),
        updated_at: String::from("2025-10-01 08:00:00"),
    }
}
