// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
mod exam;
mod merge;
mod period_key;
mod search;
mod stats;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use merge::{has_any_entries, merge_timetables};
pub use period_key::canonical_period;
pub use search::{SEARCH_RESULT_LIMIT, matches_query, search_names, search_students};
pub use stats::{TimetableStats, compute_stats};

// Re-export public types
pub use error::DomainError;
pub use exam::{
    ClassExamInfo, ExamSession, ExamType, ProctorAssignment, parse_exam_date,
    validate_assignment_fields,
};
pub use types::{
    Category, CategorySchedules, ClassInfo, CourseRow, DaySchedule, EnglishLesson, HomeroomLesson,
    Period, ScheduleEntry, Student, TaggedEntry, UnifiedDaySchedule, UnifiedWeeklySchedule,
    Weekday, WeeklySchedule,
};
pub use validation::{validate_course_row, validate_student_fields};
