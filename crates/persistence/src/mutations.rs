// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::{Connection, params};
use timetable_domain::{
    ClassExamInfo, ClassInfo, CourseRow, EnglishLesson, ExamSession, HomeroomLesson, Period,
    Student,
};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Partial update for a proctor assignment.
///
/// `None` fields are left unchanged; the update timestamp always advances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProctorAssignmentUpdate {
    /// New proctor teacher, if changed.
    pub proctor_teacher: Option<String>,
    /// New classroom, if changed.
    pub classroom: Option<String>,
    /// New notes, if changed.
    pub notes: Option<String>,
}

/// Inserts a student record.
pub fn insert_student(conn: &Connection, student: &Student) -> Result<(), PersistenceError> {
    conn.execute(
        "INSERT INTO students
            (student_id, student_name, english_class_name,
             home_room_class_name, ev_myreading_class_name)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            student.student_id,
            student.student_name,
            student.english_class_name,
            student.home_room_class_name,
            student.ev_myreading_class_name,
        ],
    )?;
    debug!(student_id = %student.student_id, "Inserted student");
    Ok(())
}

/// Inserts an english-timetable lesson row.
pub fn insert_english_lesson(
    conn: &Connection,
    lesson: &EnglishLesson,
) -> Result<(), PersistenceError> {
    conn.execute(
        "INSERT INTO english_timetable (day, period, classroom, teacher, class_name)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            lesson.day.as_str(),
            lesson.period,
            lesson.classroom,
            lesson.teacher,
            lesson.class_name,
        ],
    )?;
    Ok(())
}

/// Inserts a homeroom-timetable lesson row.
pub fn insert_homeroom_lesson(
    conn: &Connection,
    lesson: &HomeroomLesson,
) -> Result<(), PersistenceError> {
    conn.execute(
        "INSERT INTO homeroom_timetable
            (home_room_class_name, day, period, classroom, teacher, course_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            lesson.home_room_class_name,
            lesson.day.as_str(),
            lesson.period,
            lesson.classroom,
            lesson.teacher,
            lesson.course_name,
        ],
    )?;
    Ok(())
}

/// Inserts a general course timetable row.
pub fn insert_course_row(conn: &Connection, row: &CourseRow) -> Result<(), PersistenceError> {
    conn.execute(
        "INSERT INTO course_timetable
            (day, period_number, time_range, classroom, teacher, class_name)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            row.day.as_str(),
            row.period,
            row.time,
            row.classroom,
            row.teacher,
            row.class_name,
        ],
    )?;
    Ok(())
}

/// Inserts a class reference record.
pub fn insert_class(conn: &Connection, class: &ClassInfo) -> Result<(), PersistenceError> {
    conn.execute(
        "INSERT INTO classes (class_name, grade) VALUES (?1, ?2)",
        params![class.class_name, class.grade],
    )?;
    Ok(())
}

/// Inserts a teacher name.
pub fn insert_teacher(conn: &Connection, teacher_name: &str) -> Result<(), PersistenceError> {
    conn.execute(
        "INSERT INTO teachers (teacher_name) VALUES (?1)",
        params![teacher_name],
    )?;
    Ok(())
}

/// Inserts a classroom name.
pub fn insert_classroom(conn: &Connection, classroom_name: &str) -> Result<(), PersistenceError> {
    conn.execute(
        "INSERT INTO classrooms (classroom_name) VALUES (?1)",
        params![classroom_name],
    )?;
    Ok(())
}

/// Inserts a period reference record.
pub fn insert_period(conn: &Connection, period: &Period) -> Result<(), PersistenceError> {
    conn.execute(
        "INSERT INTO periods (period_number, time_range, start_time, end_time)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            period.period_number,
            period.time_range,
            period.start_time,
            period.end_time,
        ],
    )?;
    Ok(())
}

/// Inserts an exam session and returns its assigned id.
pub fn insert_exam_session(
    conn: &Connection,
    session: &ExamSession,
) -> Result<i64, PersistenceError> {
    conn.execute(
        "INSERT INTO exam_sessions
            (grade_band, exam_type, grade, exam_date, periods, duration,
             self_study_time, preparation_time, exam_time, subject)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            session.grade_band,
            session.exam_type.as_str(),
            session.grade,
            session.exam_date,
            session.periods,
            session.duration,
            session.self_study_time,
            session.preparation_time,
            session.exam_time,
            session.subject,
        ],
    )?;
    let id: i64 = conn.last_insert_rowid();
    debug!(id, grade_band = %session.grade_band, "Inserted exam session");
    Ok(id)
}

/// Inserts a class exam record and returns its assigned id.
pub fn insert_class_exam_info(
    conn: &Connection,
    info: &ClassExamInfo,
) -> Result<i64, PersistenceError> {
    conn.execute(
        "INSERT INTO class_exam_info
            (class_name, grade, level, exam_session_id, students, teacher)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            info.class_name,
            info.grade,
            info.level,
            info.exam_session_id,
            info.students,
            info.teacher,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Creates a proctor assignment and returns its assigned id.
///
/// The `UNIQUE` constraint on `class_exam_info_id` turns a duplicate
/// assignment into a `ConstraintViolation`.
pub fn create_proctor_assignment(
    conn: &Connection,
    class_exam_info_id: i64,
    proctor_teacher: &str,
    classroom: &str,
    notes: Option<&str>,
) -> Result<i64, PersistenceError> {
    conn.execute(
        "INSERT INTO proctor_assignments
            (class_exam_info_id, proctor_teacher, classroom, notes)
         VALUES (?1, ?2, ?3, ?4)",
        params![class_exam_info_id, proctor_teacher, classroom, notes],
    )?;
    let id: i64 = conn.last_insert_rowid();
    info!(id, class_exam_info_id, "Created proctor assignment");
    Ok(id)
}

/// Applies a partial update to a proctor assignment.
pub fn update_proctor_assignment(
    conn: &Connection,
    id: i64,
    update: &ProctorAssignmentUpdate,
) -> Result<(), PersistenceError> {
    let changed: usize = conn.execute(
        "UPDATE proctor_assignments SET
            proctor_teacher = COALESCE(?2, proctor_teacher),
            classroom = COALESCE(?3, classroom),
            notes = COALESCE(?4, notes),
            updated_at = datetime('now')
         WHERE id = ?1",
        params![
            id,
            update.proctor_teacher,
            update.classroom,
            update.notes,
        ],
    )?;
    if changed == 0 {
        return Err(PersistenceError::NotFound(format!(
            "proctor assignment {id}"
        )));
    }
    info!(id, "Updated proctor assignment");
    Ok(())
}

/// Deletes a proctor assignment.
pub fn delete_proctor_assignment(conn: &Connection, id: i64) -> Result<(), PersistenceError> {
    let changed: usize = conn.execute(
        "DELETE FROM proctor_assignments WHERE id = ?1",
        params![id],
    )?;
    if changed == 0 {
        return Err(PersistenceError::NotFound(format!(
            "proctor assignment {id}"
        )));
    }
    info!(id, "Deleted proctor assignment");
    Ok(())
}
