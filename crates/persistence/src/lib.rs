// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the school timetable service.
//!
//! This crate provides `SQLite` persistence for the directory records
//! (students, lessons, the general course timetable, reference lists) and
//! the exam-proctor assignment records. It is built on `rusqlite` with a
//! hand-written schema.
//!
//! `SQLite` is the only backend:
//!
//! - In-memory databases back unit and integration tests — fast and
//!   deterministic, no external infrastructure.
//! - File-based databases back deployments.
//!
//! Timetable data itself is read-mostly; proctor assignments are the only
//! records with a write lifecycle beyond the initial load.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod mutations;
mod queries;
mod schema;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use mutations::ProctorAssignmentUpdate;
pub use schema::initialize_schema;

use rusqlite::Connection;
use timetable_domain::{
    ClassExamInfo, ClassInfo, CourseRow, EnglishLesson, ExamSession, HomeroomLesson, Period,
    ProctorAssignment, Student,
};
use tracing::info;

/// Persistence adapter over a single `SQLite` connection.
///
/// Construction initializes the schema; all reads and writes go through
/// the typed methods below.
pub struct SqlitePersistence {
    pub(crate) conn: Connection,
}

impl SqlitePersistence {
    /// Creates a new in-memory persistence instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        info!("Opening in-memory database");
        let conn: Connection = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Creates a new file-backed persistence instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the database file (created if missing)
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be initialized.
    pub fn new_with_file(path: &str) -> Result<Self, PersistenceError> {
        info!(path, "Opening file-based database");
        let conn: Connection = Connection::open(path)?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    // --- Students -------------------------------------------------------

    /// Lists all students ordered by student id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_students(&self) -> Result<Vec<Student>, PersistenceError> {
        queries::list_students(&self.conn)
    }

    /// Looks up one student by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_student(&self, student_id: &str) -> Result<Option<Student>, PersistenceError> {
        queries::get_student(&self.conn, student_id)
    }

    /// Inserts a student record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (e.g. duplicate student id).
    pub fn insert_student(&self, student: &Student) -> Result<(), PersistenceError> {
        mutations::insert_student(&self.conn, student)
    }

    // --- Lessons --------------------------------------------------------

    /// Lists english-timetable lessons for a class.
    ///
    /// The english timetable also stores the EV & myReading lessons under
    /// their own class names, so this query serves both categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn english_lessons_for_class(
        &self,
        class_name: &str,
    ) -> Result<Vec<EnglishLesson>, PersistenceError> {
        queries::english_lessons_for_class(&self.conn, class_name)
    }

    /// Lists homeroom-timetable lessons for a homeroom class.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn homeroom_lessons_for_class(
        &self,
        home_room_class_name: &str,
    ) -> Result<Vec<HomeroomLesson>, PersistenceError> {
        queries::homeroom_lessons_for_class(&self.conn, home_room_class_name)
    }

    /// Lists english-timetable lessons taught by a teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn english_lessons_for_teacher(
        &self,
        teacher: &str,
    ) -> Result<Vec<EnglishLesson>, PersistenceError> {
        queries::english_lessons_for_teacher(&self.conn, teacher)
    }

    /// Lists homeroom-timetable lessons taught by a teacher.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn homeroom_lessons_for_teacher(
        &self,
        teacher: &str,
    ) -> Result<Vec<HomeroomLesson>, PersistenceError> {
        queries::homeroom_lessons_for_teacher(&self.conn, teacher)
    }

    /// Inserts an english-timetable lesson row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_english_lesson(&self, lesson: &EnglishLesson) -> Result<(), PersistenceError> {
        mutations::insert_english_lesson(&self.conn, lesson)
    }

    /// Inserts a homeroom-timetable lesson row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_homeroom_lesson(&self, lesson: &HomeroomLesson) -> Result<(), PersistenceError> {
        mutations::insert_homeroom_lesson(&self.conn, lesson)
    }

    // --- General course timetable --------------------------------------

    /// Lists course rows for a class, ordered by day then period.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn course_rows_for_class(
        &self,
        class_name: &str,
    ) -> Result<Vec<CourseRow>, PersistenceError> {
        queries::course_rows_for_class(&self.conn, class_name)
    }

    /// Inserts a general course timetable row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_course_row(&self, row: &CourseRow) -> Result<(), PersistenceError> {
        mutations::insert_course_row(&self.conn, row)
    }

    // --- Reference lists ------------------------------------------------

    /// Lists all class records ordered by class name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_classes(&self) -> Result<Vec<ClassInfo>, PersistenceError> {
        queries::list_classes(&self.conn)
    }

    /// Lists all teacher names, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_teachers(&self) -> Result<Vec<String>, PersistenceError> {
        queries::list_teachers(&self.conn)
    }

    /// Looks up a teacher by exact name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_teacher(&self, teacher_name: &str) -> Result<Option<String>, PersistenceError> {
        queries::find_teacher(&self.conn, teacher_name)
    }

    /// Lists all classroom names, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_classrooms(&self) -> Result<Vec<String>, PersistenceError> {
        queries::list_classrooms(&self.conn)
    }

    /// Lists all period records ordered by period number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_periods(&self) -> Result<Vec<Period>, PersistenceError> {
        queries::list_periods(&self.conn)
    }

    /// Inserts a class reference record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_class(&self, class: &ClassInfo) -> Result<(), PersistenceError> {
        mutations::insert_class(&self.conn, class)
    }

    /// Inserts a teacher name.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_teacher(&self, teacher_name: &str) -> Result<(), PersistenceError> {
        mutations::insert_teacher(&self.conn, teacher_name)
    }

    /// Inserts a classroom name.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_classroom(&self, classroom_name: &str) -> Result<(), PersistenceError> {
        mutations::insert_classroom(&self.conn, classroom_name)
    }

    /// Inserts a period reference record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_period(&self, period: &Period) -> Result<(), PersistenceError> {
        mutations::insert_period(&self.conn, period)
    }

    // --- Exam sessions --------------------------------------------------

    /// Lists all exam sessions ordered by date then grade band.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_exam_sessions(&self) -> Result<Vec<ExamSession>, PersistenceError> {
        queries::list_exam_sessions(&self.conn)
    }

    /// Looks up one exam session by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_exam_session(&self, id: i64) -> Result<Option<ExamSession>, PersistenceError> {
        queries::get_exam_session(&self.conn, id)
    }

    /// Lists exam sessions on a given date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn exam_sessions_by_date(
        &self,
        exam_date: &str,
    ) -> Result<Vec<ExamSession>, PersistenceError> {
        queries::exam_sessions_by_date(&self.conn, exam_date)
    }

    /// Lists the distinct exam dates, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_exam_dates(&self) -> Result<Vec<String>, PersistenceError> {
        queries::list_exam_dates(&self.conn)
    }

    /// Looks up an exam session by its grade band label.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_exam_session_by_grade_band(
        &self,
        grade_band: &str,
    ) -> Result<Option<ExamSession>, PersistenceError> {
        queries::find_exam_session_by_grade_band(&self.conn, grade_band)
    }

    /// Inserts an exam session and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (e.g. duplicate grade band).
    pub fn insert_exam_session(&self, session: &ExamSession) -> Result<i64, PersistenceError> {
        mutations::insert_exam_session(&self.conn, session)
    }

    // --- Class exam info ------------------------------------------------

    /// Lists all class exam records ordered by class name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_class_exam_info(&self) -> Result<Vec<ClassExamInfo>, PersistenceError> {
        queries::list_class_exam_info(&self.conn)
    }

    /// Lists class exam records for one session.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn class_exam_info_for_session(
        &self,
        exam_session_id: i64,
    ) -> Result<Vec<ClassExamInfo>, PersistenceError> {
        queries::class_exam_info_for_session(&self.conn, exam_session_id)
    }

    /// Looks up one class exam record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_class_exam_info(&self, id: i64) -> Result<Option<ClassExamInfo>, PersistenceError> {
        queries::get_class_exam_info(&self.conn, id)
    }

    /// Looks up one class exam record by class name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_class_exam_info_by_name(
        &self,
        class_name: &str,
    ) -> Result<Option<ClassExamInfo>, PersistenceError> {
        queries::find_class_exam_info_by_name(&self.conn, class_name)
    }

    /// Inserts a class exam record and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (e.g. unknown session id).
    pub fn insert_class_exam_info(&self, info: &ClassExamInfo) -> Result<i64, PersistenceError> {
        mutations::insert_class_exam_info(&self.conn, info)
    }

    // --- Proctor assignments --------------------------------------------

    /// Lists all proctor assignments ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_proctor_assignments(&self) -> Result<Vec<ProctorAssignment>, PersistenceError> {
        queries::list_proctor_assignments(&self.conn)
    }

    /// Looks up one proctor assignment by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_proctor_assignment(
        &self,
        id: i64,
    ) -> Result<Option<ProctorAssignment>, PersistenceError> {
        queries::get_proctor_assignment(&self.conn, id)
    }

    /// Looks up the assignment for a class exam record, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_assignment_for_class(
        &self,
        class_exam_info_id: i64,
    ) -> Result<Option<ProctorAssignment>, PersistenceError> {
        queries::find_assignment_for_class(&self.conn, class_exam_info_id)
    }

    /// Creates a proctor assignment and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the class already has an assignment or the
    /// class exam record does not exist.
    pub fn create_proctor_assignment(
        &self,
        class_exam_info_id: i64,
        proctor_teacher: &str,
        classroom: &str,
        notes: Option<&str>,
    ) -> Result<i64, PersistenceError> {
        mutations::create_proctor_assignment(
            &self.conn,
            class_exam_info_id,
            proctor_teacher,
            classroom,
            notes,
        )
    }

    /// Applies a partial update to a proctor assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment does not exist or the update
    /// fails.
    pub fn update_proctor_assignment(
        &self,
        id: i64,
        update: &ProctorAssignmentUpdate,
    ) -> Result<(), PersistenceError> {
        mutations::update_proctor_assignment(&self.conn, id, update)
    }

    /// Deletes a proctor assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment does not exist or the delete
    /// fails.
    pub fn delete_proctor_assignment(&self, id: i64) -> Result<(), PersistenceError> {
        mutations::delete_proctor_assignment(&self.conn, id)
    }
}
