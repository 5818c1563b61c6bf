// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::Connection;
use tracing::info;

use crate::error::PersistenceError;

/// Initializes the database schema.
///
/// Idempotent: every statement uses `IF NOT EXISTS`.
///
/// # Arguments
///
/// * `conn` - The database connection to initialize
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    info!("Initializing database schema");

    // Enable foreign key enforcement
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    conn.execute_batch(
        "
        -- Directory tables
        CREATE TABLE IF NOT EXISTS students (
            student_id TEXT PRIMARY KEY NOT NULL,
            student_name TEXT NOT NULL,
            english_class_name TEXT NOT NULL,
            home_room_class_name TEXT NOT NULL,
            ev_myreading_class_name TEXT
        );

        -- English timetable rows also carry the EV & myReading lessons,
        -- keyed by their own class names.
        CREATE TABLE IF NOT EXISTS english_timetable (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            day TEXT NOT NULL,
            period TEXT NOT NULL,
            classroom TEXT NOT NULL,
            teacher TEXT NOT NULL,
            class_name TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_english_by_class
            ON english_timetable(class_name);

        CREATE INDEX IF NOT EXISTS idx_english_by_teacher
            ON english_timetable(teacher);

        CREATE TABLE IF NOT EXISTS homeroom_timetable (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            home_room_class_name TEXT NOT NULL,
            day TEXT NOT NULL,
            period TEXT NOT NULL,
            classroom TEXT NOT NULL,
            teacher TEXT NOT NULL,
            course_name TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_homeroom_by_class
            ON homeroom_timetable(home_room_class_name);

        CREATE INDEX IF NOT EXISTS idx_homeroom_by_teacher
            ON homeroom_timetable(teacher);

        CREATE TABLE IF NOT EXISTS course_timetable (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            day TEXT NOT NULL,
            period_number INTEGER NOT NULL CHECK(period_number >= 1),
            time_range TEXT NOT NULL,
            classroom TEXT NOT NULL,
            teacher TEXT NOT NULL,
            class_name TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_course_by_class
            ON course_timetable(class_name);

        -- Reference lists
        CREATE TABLE IF NOT EXISTS classes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            class_name TEXT NOT NULL UNIQUE,
            grade TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS teachers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            teacher_name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS classrooms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            classroom_name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS periods (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            period_number INTEGER NOT NULL UNIQUE,
            time_range TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT NOT NULL
        );

        -- Exam-proctor tables
        CREATE TABLE IF NOT EXISTS exam_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            grade_band TEXT NOT NULL UNIQUE,
            exam_type TEXT NOT NULL CHECK(exam_type IN ('LT', 'IT')),
            grade TEXT NOT NULL,
            exam_date TEXT NOT NULL,
            periods TEXT NOT NULL,
            duration INTEGER NOT NULL,
            self_study_time TEXT,
            preparation_time TEXT NOT NULL,
            exam_time TEXT NOT NULL,
            subject TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS class_exam_info (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            class_name TEXT NOT NULL UNIQUE,
            grade TEXT NOT NULL,
            level TEXT NOT NULL,
            exam_session_id INTEGER NOT NULL,
            students INTEGER NOT NULL,
            teacher TEXT,
            FOREIGN KEY(exam_session_id) REFERENCES exam_sessions(id)
        );

        CREATE INDEX IF NOT EXISTS idx_class_exam_by_session
            ON class_exam_info(exam_session_id);

        -- One assignment per class exam record
        CREATE TABLE IF NOT EXISTS proctor_assignments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            class_exam_info_id INTEGER NOT NULL UNIQUE,
            proctor_teacher TEXT NOT NULL,
            classroom TEXT NOT NULL,
            notes TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY(class_exam_info_id) REFERENCES class_exam_info(id)
        );
        ",
    )?;

    Ok(())
}
