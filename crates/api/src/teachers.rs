// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Teacher timetable assembly.
//!
//! A teacher's weekly view collects every lesson row they appear in. The
//! english timetable rows land in the english category and homeroom rows in
//! the homeroom category; the enrichment category stays empty because
//! enrichment lessons are english-timetable rows and are indistinguishable
//! by teacher alone.

use crate::request_response::{TeacherStatistics, TeacherTimetableResponse};
use std::collections::BTreeSet;
use timetable_domain::{
    Category, CategorySchedules, EnglishLesson, HomeroomLesson, ScheduleEntry,
    UnifiedWeeklySchedule, compute_stats, merge_timetables,
};

/// Assembles the per-category schedules for a teacher from lesson rows.
#[must_use]
pub fn assemble_teacher_schedules(
    english: &[EnglishLesson],
    homeroom: &[HomeroomLesson],
) -> CategorySchedules {
    let mut schedules: CategorySchedules = CategorySchedules::default();

    for lesson in english {
        schedules
            .schedule_for_mut(Category::English)
            .entry(lesson.day)
            .or_default()
            .insert(
                lesson.period.clone(),
                ScheduleEntry {
                    subject: Some(format!("English - {}", lesson.class_name)),
                    course_name: Some(lesson.class_name.clone()),
                    teacher: lesson.teacher.clone(),
                    classroom: lesson.classroom.clone(),
                    time: None,
                    period: Some(lesson.period.clone()),
                },
            );
    }

    for lesson in homeroom {
        schedules
            .schedule_for_mut(Category::Homeroom)
            .entry(lesson.day)
            .or_default()
            .insert(
                lesson.period.clone(),
                ScheduleEntry {
                    subject: Some(lesson.course_name.clone()),
                    course_name: Some(lesson.course_name.clone()),
                    teacher: lesson.teacher.clone(),
                    classroom: lesson.classroom.clone(),
                    time: None,
                    period: Some(lesson.period.clone()),
                },
            );
    }

    schedules
}

/// Builds the full teacher timetable response.
///
/// `unique_classes` counts the distinct class names across both lesson
/// sources, deduplicated.
#[must_use]
pub fn build_teacher_timetable_response(
    teacher_name: String,
    english: &[EnglishLesson],
    homeroom: &[HomeroomLesson],
) -> TeacherTimetableResponse {
    let timetables: CategorySchedules = assemble_teacher_schedules(english, homeroom);
    let unified_timetable: UnifiedWeeklySchedule = merge_timetables(&timetables);

    let mut unique_classes: BTreeSet<&str> = BTreeSet::new();
    for lesson in english {
        unique_classes.insert(lesson.class_name.as_str());
    }
    for lesson in homeroom {
        unique_classes.insert(lesson.home_room_class_name.as_str());
    }

    let statistics: TeacherStatistics = TeacherStatistics {
        stats: compute_stats(&unified_timetable),
        unique_classes: unique_classes.len(),
    };

    TeacherTimetableResponse {
        teacher_name,
        timetables,
        unified_timetable,
        statistics,
    }
}
