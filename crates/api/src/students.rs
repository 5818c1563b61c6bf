// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student timetable assembly.
//!
//! A student's weekly view is assembled from three independent lesson
//! sources: the english timetable rows of their english class, the same
//! table's rows for their EV & myReading class (when enrolled), and the
//! homeroom timetable rows of their homeroom class. Raw period keys are
//! preserved here; canonicalization happens once, inside the merger.

use crate::request_response::StudentTimetableResponse;
use timetable_domain::{
    Category, CategorySchedules, EnglishLesson, HomeroomLesson, ScheduleEntry, Student,
    UnifiedWeeklySchedule, compute_stats, merge_timetables,
};

fn english_entry(lesson: &EnglishLesson, label_prefix: &str) -> ScheduleEntry {
    ScheduleEntry {
        subject: Some(format!("{label_prefix} - {}", lesson.class_name)),
        course_name: None,
        teacher: lesson.teacher.clone(),
        classroom: lesson.classroom.clone(),
        time: None,
        period: Some(lesson.period.clone()),
    }
}

fn homeroom_entry(lesson: &HomeroomLesson) -> ScheduleEntry {
    ScheduleEntry {
        subject: Some(lesson.course_name.clone()),
        course_name: Some(lesson.course_name.clone()),
        teacher: lesson.teacher.clone(),
        classroom: lesson.classroom.clone(),
        time: None,
        period: Some(lesson.period.clone()),
    }
}

/// Assembles the per-category schedules for a student from lesson rows.
///
/// The caller fetches the rows for the student's english class, homeroom
/// class and (optional) enrichment class; this function only reshapes them
/// into the day/period maps the merger consumes.
#[must_use]
pub fn assemble_student_schedules(
    english: &[EnglishLesson],
    homeroom: &[HomeroomLesson],
    enrichment: &[EnglishLesson],
) -> CategorySchedules {
    let mut schedules: CategorySchedules = CategorySchedules::default();

    for lesson in english {
        schedules
            .schedule_for_mut(Category::English)
            .entry(lesson.day)
            .or_default()
            .insert(lesson.period.clone(), english_entry(lesson, "English"));
    }

    for lesson in enrichment {
        schedules
            .schedule_for_mut(Category::EvMyReading)
            .entry(lesson.day)
            .or_default()
            .insert(
                lesson.period.clone(),
                english_entry(lesson, "EV & myReading"),
            );
    }

    for lesson in homeroom {
        schedules
            .schedule_for_mut(Category::Homeroom)
            .entry(lesson.day)
            .or_default()
            .insert(lesson.period.clone(), homeroom_entry(lesson));
    }

    schedules
}

/// Builds the full student timetable response: per-category schedules, the
/// unified view and its statistics.
#[must_use]
pub fn build_student_timetable_response(
    student: Student,
    timetables: CategorySchedules,
) -> StudentTimetableResponse {
    let unified_timetable: UnifiedWeeklySchedule = merge_timetables(&timetables);
    let statistics = compute_stats(&unified_timetable);

    StudentTimetableResponse {
        student,
        timetables,
        unified_timetable,
        statistics,
    }
}
