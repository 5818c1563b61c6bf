// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::{Connection, OptionalExtension, Row, params};
use std::str::FromStr;
use timetable_domain::{
    ClassExamInfo, ClassInfo, CourseRow, EnglishLesson, ExamSession, ExamType, HomeroomLesson,
    Period, ProctorAssignment, Student, Weekday,
};
use tracing::debug;

use crate::error::PersistenceError;

/// Maps a stored weekday string into the domain enum.
fn weekday_from_sql(idx: usize, value: &str) -> rusqlite::Result<Weekday> {
    Weekday::from_str(value).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
    })
}

/// Maps a stored exam type string into the domain enum.
fn exam_type_from_sql(idx: usize, value: &str) -> rusqlite::Result<ExamType> {
    ExamType::parse(value).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
    })
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        student_id: row.get(0)?,
        student_name: row.get(1)?,
        english_class_name: row.get(2)?,
        home_room_class_name: row.get(3)?,
        ev_myreading_class_name: row.get(4)?,
    })
}

fn english_lesson_from_row(row: &Row<'_>) -> rusqlite::Result<EnglishLesson> {
    let day: String = row.get(0)?;
    Ok(EnglishLesson {
        day: weekday_from_sql(0, &day)?,
        period: row.get(1)?,
        classroom: row.get(2)?,
        teacher: row.get(3)?,
        class_name: row.get(4)?,
    })
}

fn homeroom_lesson_from_row(row: &Row<'_>) -> rusqlite::Result<HomeroomLesson> {
    let day: String = row.get(1)?;
    Ok(HomeroomLesson {
        home_room_class_name: row.get(0)?,
        day: weekday_from_sql(1, &day)?,
        period: row.get(2)?,
        classroom: row.get(3)?,
        teacher: row.get(4)?,
        course_name: row.get(5)?,
    })
}

fn course_row_from_row(row: &Row<'_>) -> rusqlite::Result<CourseRow> {
    let day: String = row.get(0)?;
    Ok(CourseRow {
        day: weekday_from_sql(0, &day)?,
        period: row.get(1)?,
        time: row.get(2)?,
        classroom: row.get(3)?,
        teacher: row.get(4)?,
        class_name: row.get(5)?,
    })
}

fn exam_session_from_row(row: &Row<'_>) -> rusqlite::Result<ExamSession> {
    let exam_type: String = row.get(2)?;
    Ok(ExamSession {
        id: row.get(0)?,
        grade_band: row.get(1)?,
        exam_type: exam_type_from_sql(2, &exam_type)?,
        grade: row.get(3)?,
        exam_date: row.get(4)?,
        periods: row.get(5)?,
        duration: row.get(6)?,
        self_study_time: row.get(7)?,
        preparation_time: row.get(8)?,
        exam_time: row.get(9)?,
        subject: row.get(10)?,
    })
}

fn class_exam_info_from_row(row: &Row<'_>) -> rusqlite::Result<ClassExamInfo> {
    Ok(ClassExamInfo {
        id: row.get(0)?,
        class_name: row.get(1)?,
        grade: row.get(2)?,
        level: row.get(3)?,
        exam_session_id: row.get(4)?,
        students: row.get(5)?,
        teacher: row.get(6)?,
    })
}

fn proctor_assignment_from_row(row: &Row<'_>) -> rusqlite::Result<ProctorAssignment> {
    Ok(ProctorAssignment {
        id: row.get(0)?,
        class_exam_info_id: row.get(1)?,
        proctor_teacher: row.get(2)?,
        classroom: row.get(3)?,
        notes: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

const STUDENT_COLUMNS: &str = "student_id, student_name, english_class_name, \
                               home_room_class_name, ev_myreading_class_name";

const SESSION_COLUMNS: &str = "id, grade_band, exam_type, grade, exam_date, periods, duration, \
                               self_study_time, preparation_time, exam_time, subject";

/// Lists all students ordered by student id.
pub fn list_students(conn: &Connection) -> Result<Vec<Student>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {STUDENT_COLUMNS} FROM students ORDER BY student_id"
    ))?;
    let students: Vec<Student> = stmt
        .query_map([], student_from_row)?
        .collect::<rusqlite::Result<Vec<Student>>>()?;
    debug!(count = students.len(), "Listed students");
    Ok(students)
}

/// Looks up one student by id.
pub fn get_student(
    conn: &Connection,
    student_id: &str,
) -> Result<Option<Student>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {STUDENT_COLUMNS} FROM students WHERE student_id = ?1"
    ))?;
    let student: Option<Student> = stmt
        .query_row(params![student_id], student_from_row)
        .optional()?;
    Ok(student)
}

/// Lists english-timetable lessons for a class.
pub fn english_lessons_for_class(
    conn: &Connection,
    class_name: &str,
) -> Result<Vec<EnglishLesson>, PersistenceError> {
    let mut stmt = conn.prepare(
        "SELECT day, period, classroom, teacher, class_name
         FROM english_timetable WHERE class_name = ?1 ORDER BY id",
    )?;
    let lessons: Vec<EnglishLesson> = stmt
        .query_map(params![class_name], english_lesson_from_row)?
        .collect::<rusqlite::Result<Vec<EnglishLesson>>>()?;
    Ok(lessons)
}

/// Lists homeroom-timetable lessons for a homeroom class.
pub fn homeroom_lessons_for_class(
    conn: &Connection,
    home_room_class_name: &str,
) -> Result<Vec<HomeroomLesson>, PersistenceError> {
    let mut stmt = conn.prepare(
        "SELECT home_room_class_name, day, period, classroom, teacher, course_name
         FROM homeroom_timetable WHERE home_room_class_name = ?1 ORDER BY id",
    )?;
    let lessons: Vec<HomeroomLesson> = stmt
        .query_map(params![home_room_class_name], homeroom_lesson_from_row)?
        .collect::<rusqlite::Result<Vec<HomeroomLesson>>>()?;
    Ok(lessons)
}

/// Lists english-timetable lessons taught by a teacher.
pub fn english_lessons_for_teacher(
    conn: &Connection,
    teacher: &str,
) -> Result<Vec<EnglishLesson>, PersistenceError> {
    let mut stmt = conn.prepare(
        "SELECT day, period, classroom, teacher, class_name
         FROM english_timetable WHERE teacher = ?1 ORDER BY id",
    )?;
    let lessons: Vec<EnglishLesson> = stmt
        .query_map(params![teacher], english_lesson_from_row)?
        .collect::<rusqlite::Result<Vec<EnglishLesson>>>()?;
    Ok(lessons)
}

/// Lists homeroom-timetable lessons taught by a teacher.
pub fn homeroom_lessons_for_teacher(
    conn: &Connection,
    teacher: &str,
) -> Result<Vec<HomeroomLesson>, PersistenceError> {
    let mut stmt = conn.prepare(
        "SELECT home_room_class_name, day, period, classroom, teacher, course_name
         FROM homeroom_timetable WHERE teacher = ?1 ORDER BY id",
    )?;
    let lessons: Vec<HomeroomLesson> = stmt
        .query_map(params![teacher], homeroom_lesson_from_row)?
        .collect::<rusqlite::Result<Vec<HomeroomLesson>>>()?;
    Ok(lessons)
}

/// Lists course rows for a class, ordered by day then period.
pub fn course_rows_for_class(
    conn: &Connection,
    class_name: &str,
) -> Result<Vec<CourseRow>, PersistenceError> {
    // Weekday ordering is by domain order, not alphabetical; rows are
    // re-grouped by the caller, so id order per day is sufficient here.
    let mut stmt = conn.prepare(
        "SELECT day, period_number, time_range, classroom, teacher, class_name
         FROM course_timetable WHERE class_name = ?1 ORDER BY period_number, id",
    )?;
    let rows: Vec<CourseRow> = stmt
        .query_map(params![class_name], course_row_from_row)?
        .collect::<rusqlite::Result<Vec<CourseRow>>>()?;
    Ok(rows)
}

/// Lists all class records ordered by class name.
pub fn list_classes(conn: &Connection) -> Result<Vec<ClassInfo>, PersistenceError> {
    let mut stmt = conn.prepare("SELECT class_name, grade FROM classes ORDER BY class_name")?;
    let classes: Vec<ClassInfo> = stmt
        .query_map([], |row| {
            Ok(ClassInfo {
                class_name: row.get(0)?,
                grade: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<ClassInfo>>>()?;
    Ok(classes)
}

/// Lists all teacher names, sorted.
pub fn list_teachers(conn: &Connection) -> Result<Vec<String>, PersistenceError> {
    let mut stmt = conn.prepare("SELECT teacher_name FROM teachers ORDER BY teacher_name")?;
    let teachers: Vec<String> = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(teachers)
}

/// Looks up a teacher by exact name.
pub fn find_teacher(
    conn: &Connection,
    teacher_name: &str,
) -> Result<Option<String>, PersistenceError> {
    let mut stmt = conn.prepare("SELECT teacher_name FROM teachers WHERE teacher_name = ?1")?;
    let teacher: Option<String> = stmt
        .query_row(params![teacher_name], |row| row.get(0))
        .optional()?;
    Ok(teacher)
}

/// Lists all classroom names, sorted.
pub fn list_classrooms(conn: &Connection) -> Result<Vec<String>, PersistenceError> {
    let mut stmt = conn.prepare("SELECT classroom_name FROM classrooms ORDER BY classroom_name")?;
    let classrooms: Vec<String> = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(classrooms)
}

/// Lists all period records ordered by period number.
pub fn list_periods(conn: &Connection) -> Result<Vec<Period>, PersistenceError> {
    let mut stmt = conn.prepare(
        "SELECT period_number, time_range, start_time, end_time
         FROM periods ORDER BY period_number",
    )?;
    let periods: Vec<Period> = stmt
        .query_map([], |row| {
            Ok(Period {
                period_number: row.get(0)?,
                time_range: row.get(1)?,
                start_time: row.get(2)?,
                end_time: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<Period>>>()?;
    Ok(periods)
}

/// Lists all exam sessions ordered by date then grade band.
pub fn list_exam_sessions(conn: &Connection) -> Result<Vec<ExamSession>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SESSION_COLUMNS} FROM exam_sessions ORDER BY exam_date, grade_band"
    ))?;
    let sessions: Vec<ExamSession> = stmt
        .query_map([], exam_session_from_row)?
        .collect::<rusqlite::Result<Vec<ExamSession>>>()?;
    Ok(sessions)
}

/// Looks up one exam session by id.
pub fn get_exam_session(
    conn: &Connection,
    id: i64,
) -> Result<Option<ExamSession>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SESSION_COLUMNS} FROM exam_sessions WHERE id = ?1"
    ))?;
    let session: Option<ExamSession> = stmt
        .query_row(params![id], exam_session_from_row)
        .optional()?;
    Ok(session)
}

/// Lists exam sessions on a given date.
pub fn exam_sessions_by_date(
    conn: &Connection,
    exam_date: &str,
) -> Result<Vec<ExamSession>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SESSION_COLUMNS} FROM exam_sessions WHERE exam_date = ?1 ORDER BY grade_band"
    ))?;
    let sessions: Vec<ExamSession> = stmt
        .query_map(params![exam_date], exam_session_from_row)?
        .collect::<rusqlite::Result<Vec<ExamSession>>>()?;
    Ok(sessions)
}

/// Lists the distinct exam dates, sorted.
pub fn list_exam_dates(conn: &Connection) -> Result<Vec<String>, PersistenceError> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT exam_date FROM exam_sessions ORDER BY exam_date")?;
    let dates: Vec<String> = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(dates)
}

/// Looks up an exam session by its grade band label.
pub fn find_exam_session_by_grade_band(
    conn: &Connection,
    grade_band: &str,
) -> Result<Option<ExamSession>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SESSION_COLUMNS} FROM exam_sessions WHERE grade_band = ?1"
    ))?;
    let session: Option<ExamSession> = stmt
        .query_row(params![grade_band], exam_session_from_row)
        .optional()?;
    Ok(session)
}

const CLASS_EXAM_COLUMNS: &str =
    "id, class_name, grade, level, exam_session_id, students, teacher";

/// Lists all class exam records ordered by class name.
pub fn list_class_exam_info(conn: &Connection) -> Result<Vec<ClassExamInfo>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CLASS_EXAM_COLUMNS} FROM class_exam_info ORDER BY class_name"
    ))?;
    let classes: Vec<ClassExamInfo> = stmt
        .query_map([], class_exam_info_from_row)?
        .collect::<rusqlite::Result<Vec<ClassExamInfo>>>()?;
    Ok(classes)
}

/// Lists class exam records for one session.
pub fn class_exam_info_for_session(
    conn: &Connection,
    exam_session_id: i64,
) -> Result<Vec<ClassExamInfo>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CLASS_EXAM_COLUMNS} FROM class_exam_info
         WHERE exam_session_id = ?1 ORDER BY class_name"
    ))?;
    let classes: Vec<ClassExamInfo> = stmt
        .query_map(params![exam_session_id], class_exam_info_from_row)?
        .collect::<rusqlite::Result<Vec<ClassExamInfo>>>()?;
    Ok(classes)
}

/// Looks up one class exam record by id.
pub fn get_class_exam_info(
    conn: &Connection,
    id: i64,
) -> Result<Option<ClassExamInfo>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CLASS_EXAM_COLUMNS} FROM class_exam_info WHERE id = ?1"
    ))?;
    let info: Option<ClassExamInfo> = stmt
        .query_row(params![id], class_exam_info_from_row)
        .optional()?;
    Ok(info)
}

/// Looks up one class exam record by class name.
pub fn find_class_exam_info_by_name(
    conn: &Connection,
    class_name: &str,
) -> Result<Option<ClassExamInfo>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CLASS_EXAM_COLUMNS} FROM class_exam_info WHERE class_name = ?1"
    ))?;
    let info: Option<ClassExamInfo> = stmt
        .query_row(params![class_name], class_exam_info_from_row)
        .optional()?;
    Ok(info)
}

const ASSIGNMENT_COLUMNS: &str = "id, class_exam_info_id, proctor_teacher, classroom, notes, \
                                  created_at, updated_at";

/// Lists all proctor assignments ordered by id.
pub fn list_proctor_assignments(
    conn: &Connection,
) -> Result<Vec<ProctorAssignment>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ASSIGNMENT_COLUMNS} FROM proctor_assignments ORDER BY id"
    ))?;
    let assignments: Vec<ProctorAssignment> = stmt
        .query_map([], proctor_assignment_from_row)?
        .collect::<rusqlite::Result<Vec<ProctorAssignment>>>()?;
    Ok(assignments)
}

/// Looks up one proctor assignment by id.
pub fn get_proctor_assignment(
    conn: &Connection,
    id: i64,
) -> Result<Option<ProctorAssignment>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ASSIGNMENT_COLUMNS} FROM proctor_assignments WHERE id = ?1"
    ))?;
    let assignment: Option<ProctorAssignment> = stmt
        .query_row(params![id], proctor_assignment_from_row)
        .optional()?;
    Ok(assignment)
}

/// Looks up the assignment for a class exam record, if any.
pub fn find_assignment_for_class(
    conn: &Connection,
    class_exam_info_id: i64,
) -> Result<Option<ProctorAssignment>, PersistenceError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ASSIGNMENT_COLUMNS} FROM proctor_assignments WHERE class_exam_info_id = ?1"
    ))?;
    let assignment: Option<ProctorAssignment> = stmt
        .query_row(params![class_exam_info_id], proctor_assignment_from_row)
        .optional()?;
    Ok(assignment)
}
