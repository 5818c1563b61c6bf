// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Exam-proctor assignment rules and statistics.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    ClassExamDetail, ExamDateStats, ExamOverallStats, ExamStatsResponse,
};
use std::collections::HashSet;
use timetable_domain::{
    ClassExamInfo, DomainError, ExamSession, ProctorAssignment, validate_assignment_fields,
};
use tracing::debug;

/// Validates the writable fields of an assignment request.
///
/// # Errors
///
/// Returns an error if the proctor teacher or classroom is empty.
pub fn validate_assignment_request(
    proctor_teacher: &str,
    classroom: &str,
) -> Result<(), ApiError> {
    validate_assignment_fields(proctor_teacher, classroom).map_err(translate_domain_error)
}

/// Enforces the one-assignment-per-class rule for creation.
///
/// # Arguments
///
/// * `existing` - The assignment already stored for the class, if any
/// * `class_exam_info_id` - The class being assigned
///
/// # Errors
///
/// Returns a domain-rule violation if the class already has an assignment;
/// creation must not silently overwrite it.
pub fn ensure_assignment_absent(
    existing: Option<&ProctorAssignment>,
    class_exam_info_id: i64,
) -> Result<(), ApiError> {
    if existing.is_some() {
        return Err(translate_domain_error(
            DomainError::DuplicateProctorAssignment { class_exam_info_id },
        ));
    }
    Ok(())
}

/// Joins a class exam record with its session and assignment state.
#[must_use]
pub fn build_class_exam_detail(
    info: ClassExamInfo,
    exam_session: Option<ExamSession>,
    assignment: Option<&ProctorAssignment>,
) -> ClassExamDetail {
    let count: u32 = info.head_count();
    ClassExamDetail {
        count,
        has_proctor: assignment.is_some(),
        exam_session,
        proctor: assignment.map(|a| a.proctor_teacher.clone()),
        classroom: assignment.map(|a| a.classroom.clone()),
        notes: assignment.and_then(|a| a.notes.clone()),
        info,
    }
}

fn rounded_percent(assigned: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let raw: f64 = assigned as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Computes overall and per-date assignment progress.
///
/// A class counts as assigned when any stored assignment references it.
/// The per-date breakdown groups classes through their session's exam
/// date; dates appear in session order.
#[must_use]
pub fn compute_exam_stats(
    classes: &[ClassExamInfo],
    assignments: &[ProctorAssignment],
    sessions: &[ExamSession],
) -> ExamStatsResponse {
    let assigned_ids: HashSet<i64> = assignments
        .iter()
        .map(|assignment| assignment.class_exam_info_id)
        .collect();

    let total_classes: usize = classes.len();
    let assigned: usize = classes
        .iter()
        .filter(|class| class.id.is_some_and(|id| assigned_ids.contains(&id)))
        .count();

    let mut by_date: Vec<ExamDateStats> = Vec::new();
    let mut seen_dates: HashSet<&str> = HashSet::new();
    for session in sessions {
        if !seen_dates.insert(session.exam_date.as_str()) {
            continue;
        }

        // All sessions on this date, then all classes in those sessions
        let session_ids: HashSet<i64> = sessions
            .iter()
            .filter(|s| s.exam_date == session.exam_date)
            .filter_map(|s| s.id)
            .collect();
        let date_classes: Vec<&ClassExamInfo> = classes
            .iter()
            .filter(|class| session_ids.contains(&class.exam_session_id))
            .collect();
        let date_assigned: usize = date_classes
            .iter()
            .filter(|class| class.id.is_some_and(|id| assigned_ids.contains(&id)))
            .count();

        by_date.push(ExamDateStats {
            date: session.exam_date.clone(),
            total_classes: date_classes.len(),
            assigned: date_assigned,
            unassigned: date_classes.len() - date_assigned,
        });
    }

    debug!(total_classes, assigned, "Computed exam statistics");

    ExamStatsResponse {
        overall: ExamOverallStats {
            total_classes,
            assigned,
            unassigned: total_classes - assigned,
            progress_percent: rounded_percent(assigned, total_classes),
        },
        by_date,
    }
}
