// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON seed-data loading.
//!
//! The service ships its timetable data as JSON fixture files; on startup
//! with `--seed <dir>` an empty database is populated from whichever files
//! are present. Every file is optional. A non-empty database is left
//! untouched so restarts never duplicate rows.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use timetable_domain::{
    ClassExamInfo, ClassInfo, CourseRow, EnglishLesson, ExamSession, HomeroomLesson, Period,
    Student, validate_course_row, validate_student_fields,
};
use timetable_persistence::SqlitePersistence;
use tracing::{info, warn};

/// One class exam record as stored in the seed files, linked to its
/// session by grade band rather than numeric id.
#[derive(Debug, Clone, Deserialize)]
struct SeedClassExamInfo {
    class_name: String,
    grade: String,
    level: String,
    grade_band: String,
    students: u32,
    #[serde(default)]
    teacher: Option<String>,
}

/// Reads and deserializes one optional seed file.
fn read_seed_file<T: serde::de::DeserializeOwned>(
    dir: &Path,
    name: &str,
) -> Result<Option<Vec<T>>, Box<dyn std::error::Error>> {
    let path: PathBuf = dir.join(name);
    if !path.exists() {
        return Ok(None);
    }
    let contents: String = std::fs::read_to_string(&path)?;
    let records: Vec<T> = serde_json::from_str(&contents)?;
    Ok(Some(records))
}

/// Loads seed data into an empty database.
///
/// # Errors
///
/// Returns an error if a seed file is unreadable or malformed, or if an
/// insert fails. Records that fail domain validation are skipped with a
/// warning rather than aborting the load.
pub fn load_seed_data(
    persistence: &SqlitePersistence,
    seed_dir: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir: &Path = Path::new(seed_dir);

    // A populated database is never re-seeded
    if !persistence.list_students()?.is_empty() || !persistence.list_exam_sessions()?.is_empty() {
        info!("Database already contains data, skipping seed load");
        return Ok(());
    }

    info!(seed_dir, "Loading seed data");

    if let Some(students) = read_seed_file::<Student>(dir, "students.json")? {
        let mut loaded: usize = 0;
        for student in &students {
            if let Err(err) = validate_student_fields(student) {
                warn!(student_id = %student.student_id, error = %err, "Skipping invalid student");
                continue;
            }
            persistence.insert_student(student)?;
            loaded += 1;
        }
        info!(loaded, total = students.len(), "Loaded students");
    }

    if let Some(lessons) = read_seed_file::<EnglishLesson>(dir, "english_timetable.json")? {
        for lesson in &lessons {
            persistence.insert_english_lesson(lesson)?;
        }
        info!(loaded = lessons.len(), "Loaded english timetable");
    }

    if let Some(lessons) = read_seed_file::<HomeroomLesson>(dir, "homeroom_timetable.json")? {
        for lesson in &lessons {
            persistence.insert_homeroom_lesson(lesson)?;
        }
        info!(loaded = lessons.len(), "Loaded homeroom timetable");
    }

    if let Some(rows) = read_seed_file::<CourseRow>(dir, "course_timetable.json")? {
        let mut loaded: usize = 0;
        for row in &rows {
            if let Err(err) = validate_course_row(row) {
                warn!(class_name = %row.class_name, error = %err, "Skipping invalid course row");
                continue;
            }
            persistence.insert_course_row(row)?;
            loaded += 1;
        }
        info!(loaded, total = rows.len(), "Loaded course timetable");
    }

    if let Some(classes) = read_seed_file::<ClassInfo>(dir, "classes.json")? {
        for class in &classes {
            persistence.insert_class(class)?;
        }
        info!(loaded = classes.len(), "Loaded classes");
    }

    if let Some(teachers) = read_seed_file::<String>(dir, "teachers.json")? {
        for teacher in &teachers {
            persistence.insert_teacher(teacher)?;
        }
        info!(loaded = teachers.len(), "Loaded teachers");
    }

    if let Some(classrooms) = read_seed_file::<String>(dir, "classrooms.json")? {
        for classroom in &classrooms {
            persistence.insert_classroom(classroom)?;
        }
        info!(loaded = classrooms.len(), "Loaded classrooms");
    }

    if let Some(periods) = read_seed_file::<Period>(dir, "periods.json")? {
        for period in &periods {
            persistence.insert_period(period)?;
        }
        info!(loaded = periods.len(), "Loaded periods");
    }

    if let Some(sessions) = read_seed_file::<ExamSession>(dir, "exam_sessions.json")? {
        for session in &sessions {
            persistence.insert_exam_session(session)?;
        }
        info!(loaded = sessions.len(), "Loaded exam sessions");
    }

    if let Some(class_exams) = read_seed_file::<SeedClassExamInfo>(dir, "class_exam_info.json")? {
        let mut loaded: usize = 0;
        for record in class_exams {
            let Some(session) = persistence.find_exam_session_by_grade_band(&record.grade_band)?
            else {
                warn!(
                    class_name = %record.class_name,
                    grade_band = %record.grade_band,
                    "Skipping class exam info with unknown grade band"
                );
                continue;
            };
            let Some(session_id) = session.id else {
                continue;
            };
            persistence.insert_class_exam_info(&ClassExamInfo {
                id: None,
                class_name: record.class_name,
                grade: record.grade,
                level: record.level,
                exam_session_id: session_id,
                students: record.students,
                teacher: record.teacher,
            })?;
            loaded += 1;
        }
        info!(loaded, "Loaded class exam info");
    }

    Ok(())
}
