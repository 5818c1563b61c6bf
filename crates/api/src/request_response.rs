// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs.
//!
//! These types are the API contract; field names mirror the wire format the
//! original frontend consumes. They are distinct from domain types even
//! where the shapes coincide.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use timetable_domain::{
    CategorySchedules, ClassExamInfo, ExamSession, ProctorAssignment, Student, TimetableStats,
    UnifiedWeeklySchedule, Weekday,
};

/// Response for a student timetable lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentTimetableResponse {
    /// The student record.
    pub student: Student,
    /// The three per-category timetables, keyed by raw period keys.
    pub timetables: CategorySchedules,
    /// The merged day-by-period view, keyed by canonical periods.
    pub unified_timetable: UnifiedWeeklySchedule,
    /// Aggregate counts over the unified view.
    pub statistics: TimetableStats,
}

/// Timetable statistics extended with the teacher's distinct class count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherStatistics {
    /// The base statistics over the unified view.
    #[serde(flatten)]
    pub stats: TimetableStats,
    /// Number of distinct classes the teacher appears in.
    pub unique_classes: usize,
}

/// Response for a teacher timetable lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherTimetableResponse {
    /// The teacher's name.
    pub teacher_name: String,
    /// The per-category timetables assembled from the teacher's lessons.
    pub timetables: CategorySchedules,
    /// The merged day-by-period view.
    pub unified_timetable: UnifiedWeeklySchedule,
    /// Aggregate counts plus the distinct class count.
    pub statistics: TeacherStatistics,
}

/// One course occurrence in a class timetable response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// The period number.
    pub period: u8,
    /// Display time range.
    pub time: String,
    /// The teacher.
    pub teacher: String,
    /// The room.
    pub classroom: String,
}

/// Response for a class timetable lookup: per-day course lists, sorted by
/// period, with every weekday present even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTimetableResponse {
    /// The class name.
    pub class_name: String,
    /// The weekly timetable.
    pub timetable: BTreeMap<Weekday, Vec<CourseEntry>>,
}

/// One class exam record joined with its session and assignment state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassExamDetail {
    /// The class exam record.
    #[serde(flatten)]
    pub info: ClassExamInfo,
    /// Seat count: students plus the proctor.
    pub count: u32,
    /// Whether a proctor has been assigned.
    pub has_proctor: bool,
    /// The joined exam session, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_session: Option<ExamSession>,
    /// The assigned proctor, if any.
    pub proctor: Option<String>,
    /// The assigned exam classroom, if any.
    pub classroom: Option<String>,
    /// Assignment notes, if any.
    pub notes: Option<String>,
}

/// A proctor assignment enriched with its class name for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProctorAssignmentView {
    /// The stored assignment.
    #[serde(flatten)]
    pub assignment: ProctorAssignment,
    /// The class the assignment belongs to, when resolvable.
    pub class_name: Option<String>,
}

/// Request to create a proctor assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProctorRequest {
    /// The class exam record to assign a proctor to.
    pub class_exam_info_id: i64,
    /// The proctor teacher.
    pub proctor_teacher: String,
    /// The exam classroom.
    pub classroom: String,
    /// Optional notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to update a proctor assignment. Absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProctorRequest {
    /// New proctor teacher.
    #[serde(default)]
    pub proctor_teacher: Option<String>,
    /// New classroom.
    #[serde(default)]
    pub classroom: Option<String>,
    /// New notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// One item of a batch assignment request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProctorItem {
    /// The class exam record; items without one are reported as errors.
    #[serde(default)]
    pub class_exam_info_id: Option<i64>,
    /// The proctor teacher.
    #[serde(default)]
    pub proctor_teacher: Option<String>,
    /// The classroom.
    #[serde(default)]
    pub classroom: Option<String>,
    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to create or update assignments in bulk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProctorRequest {
    /// The assignments to apply.
    pub assignments: Vec<BatchProctorItem>,
}

/// Outcome of a batch assignment request.
///
/// Individual item failures are collected rather than aborting the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchProctorOutcome {
    /// Number of assignments created.
    pub created: usize,
    /// Number of assignments updated.
    pub updated: usize,
    /// Per-item error messages.
    pub errors: Vec<String>,
}

/// Overall exam assignment progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamOverallStats {
    /// Total class exam records.
    pub total_classes: usize,
    /// Classes with an assigned proctor.
    pub assigned: usize,
    /// Classes without an assigned proctor.
    pub unassigned: usize,
    /// Assignment progress, 0-100 with two decimal places.
    pub progress_percent: f64,
}

/// Per-date exam assignment progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamDateStats {
    /// The exam date.
    pub date: String,
    /// Total class exam records on this date.
    pub total_classes: usize,
    /// Classes with an assigned proctor.
    pub assigned: usize,
    /// Classes without an assigned proctor.
    pub unassigned: usize,
}

/// Response for the exam statistics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamStatsResponse {
    /// Overall progress.
    pub overall: ExamOverallStats,
    /// Breakdown by exam date.
    pub by_date: Vec<ExamDateStats>,
}
