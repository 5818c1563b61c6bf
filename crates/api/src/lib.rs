// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the school timetable service.
//!
//! The functions in this crate are pure: they operate on rows the caller
//! has already fetched and produce response DTOs or typed errors. All I/O
//! (database access, HTTP) belongs to the server crate; all rules and data
//! shaping live here or in the domain crate. Domain and persistence errors
//! never leak through this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod classes;
mod csv_export;
mod error;
mod exams;
mod request_response;
mod students;
mod teachers;

#[cfg(test)]
mod tests;

pub use classes::{build_class_timetable_response, class_names};
pub use csv_export::{build_proctor_report, report_filename};
pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use exams::{
    build_class_exam_detail, compute_exam_stats, ensure_assignment_absent,
    validate_assignment_request,
};
pub use request_response::{
    BatchProctorItem, BatchProctorOutcome, BatchProctorRequest, ClassExamDetail,
    ClassTimetableResponse, CourseEntry, CreateProctorRequest, ExamDateStats, ExamOverallStats,
    ExamStatsResponse, ProctorAssignmentView, StudentTimetableResponse, TeacherStatistics,
    TeacherTimetableResponse, UpdateProctorRequest,
};
pub use students::{assemble_student_schedules, build_student_timetable_response};
pub use teachers::{assemble_teacher_schedules, build_teacher_timetable_response};
