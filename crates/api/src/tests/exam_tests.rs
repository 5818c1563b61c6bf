// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_assignment, create_class_exam_info, create_test_session};
use crate::request_response::ExamStatsResponse;
use crate::{
    ApiError, build_class_exam_detail, compute_exam_stats, ensure_assignment_absent,
    validate_assignment_request,
};
use timetable_domain::{ClassExamInfo, ExamSession, ProctorAssignment};

#[test]
fn test_validate_assignment_request_rejects_blank_fields() {
    assert!(validate_assignment_request("Ms. Wu", "E101").is_ok());

    let missing_teacher: Result<(), ApiError> = validate_assignment_request("", "E101");
    assert!(matches!(
        missing_teacher,
        Err(ApiError::InvalidInput { .. })
    ));

    let missing_room: Result<(), ApiError> = validate_assignment_request("Ms. Wu", "  ");
    assert!(matches!(missing_room, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_ensure_assignment_absent_flags_duplicates() {
    let existing: ProctorAssignment = create_assignment(1, 10);

    let result: Result<(), ApiError> = ensure_assignment_absent(Some(&existing), 10);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { .. })
    ));
    if let Err(ApiError::DomainRuleViolation { rule, message }) = result {
        assert_eq!(rule, "one_assignment_per_class");
        assert!(message.contains("10"));
    }

    assert!(ensure_assignment_absent(None, 10).is_ok());
}

#[test]
fn test_class_exam_detail_joins_assignment_state() {
    let info: ClassExamInfo = create_class_exam_info(1, "G1 Achievers", 1);
    let session: ExamSession = create_test_session(1, "G1 LT's", "2025-11-04");
    let assignment: ProctorAssignment = create_assignment(5, 1);

    let assigned = build_class_exam_detail(info.clone(), Some(session.clone()), Some(&assignment));
    assert!(assigned.has_proctor);
    assert_eq!(assigned.proctor.as_deref(), Some("Ms. Wu"));
    assert_eq!(assigned.classroom.as_deref(), Some("E101"));
    assert_eq!(assigned.count, 25);

    let unassigned = build_class_exam_detail(info, Some(session), None);
    assert!(!unassigned.has_proctor);
    assert!(unassigned.proctor.is_none());
    assert!(unassigned.classroom.is_none());
}

#[test]
fn test_stats_with_no_classes_are_all_zero() {
    let stats: ExamStatsResponse = compute_exam_stats(&[], &[], &[]);

    assert_eq!(stats.overall.total_classes, 0);
    assert_eq!(stats.overall.assigned, 0);
    assert_eq!(stats.overall.unassigned, 0);
    assert!((stats.overall.progress_percent - 0.0).abs() < f64::EPSILON);
    assert!(stats.by_date.is_empty());
}

#[test]
fn test_stats_count_assigned_and_round_progress() {
    let sessions: Vec<ExamSession> = vec![create_test_session(1, "G1 LT's", "2025-11-04")];
    let classes: Vec<ClassExamInfo> = vec![
        create_class_exam_info(1, "G1 Achievers", 1),
        create_class_exam_info(2, "G1 Builders", 1),
        create_class_exam_info(3, "G1 Creators", 1),
    ];
    let assignments: Vec<ProctorAssignment> = vec![create_assignment(1, 1)];

    let stats: ExamStatsResponse = compute_exam_stats(&classes, &assignments, &sessions);

    assert_eq!(stats.overall.total_classes, 3);
    assert_eq!(stats.overall.assigned, 1);
    assert_eq!(stats.overall.unassigned, 2);
    // 1/3 rounded to two decimal places
    assert!((stats.overall.progress_percent - 33.33).abs() < 1e-9);
}

#[test]
fn test_stats_group_by_exam_date() {
    let sessions: Vec<ExamSession> = vec![
        create_test_session(1, "G1 LT's", "2025-11-04"),
        create_test_session(2, "G2 LT's", "2025-11-04"),
        create_test_session(3, "G3 LT's", "2025-11-05"),
    ];
    let classes: Vec<ClassExamInfo> = vec![
        create_class_exam_info(1, "G1 Achievers", 1),
        create_class_exam_info(2, "G2 Builders", 2),
        create_class_exam_info(3, "G3 Creators", 3),
    ];
    let assignments: Vec<ProctorAssignment> =
        vec![create_assignment(1, 1), create_assignment(2, 3)];

    let stats: ExamStatsResponse = compute_exam_stats(&classes, &assignments, &sessions);

    assert_eq!(stats.by_date.len(), 2);

    let first_day = &stats.by_date[0];
    assert_eq!(first_day.date, "2025-11-04");
    assert_eq!(first_day.total_classes, 2);
    assert_eq!(first_day.assigned, 1);
    assert_eq!(first_day.unassigned, 1);

    let second_day = &stats.by_date[1];
    assert_eq!(second_day.date, "2025-11-05");
    assert_eq!(second_day.total_classes, 1);
    assert_eq!(second_day.assigned, 1);
}
