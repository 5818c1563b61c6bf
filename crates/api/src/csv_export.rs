// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of proctor assignments.
//!
//! Produces the 15-column midterm report consumed by the school office.
//! One row per class exam record, joined with its session and (optional)
//! assignment; unassigned classes export with blank proctor fields.

use crate::error::ApiError;
use timetable_domain::{ClassExamInfo, ExamSession, ProctorAssignment};
use tracing::debug;

/// Column headers of the proctor report.
const REPORT_HEADERS: [&str; 15] = [
    "ClassName",
    "Grade",
    "Teacher",
    "Level",
    "Classroom",
    "GradeBand",
    "Duration",
    "Periods",
    "Self-Study",
    "Preparation",
    "ExamTime",
    "Proctor",
    "Subject",
    "Count",
    "Students",
];

/// Builds the proctor report CSV from joined records.
///
/// # Arguments
///
/// * `records` - One tuple per class: the class exam record, its session,
///   and its assignment if one exists
///
/// # Errors
///
/// Returns an internal error if CSV serialization fails.
pub fn build_proctor_report(
    records: &[(ClassExamInfo, ExamSession, Option<ProctorAssignment>)],
) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(REPORT_HEADERS)
        .map_err(|err| ApiError::Internal {
            message: format!("CSV serialization failed: {err}"),
        })?;

    for (info, session, assignment) in records {
        let classroom: &str = assignment.as_ref().map_or("", |a| a.classroom.as_str());
        let proctor: &str = assignment
            .as_ref()
            .map_or("", |a| a.proctor_teacher.as_str());
        let self_study: &str = session.self_study_time.as_deref().unwrap_or("None");

        writer
            .write_record([
                info.class_name.as_str(),
                info.grade.as_str(),
                info.teacher.as_deref().unwrap_or(""),
                info.level.as_str(),
                classroom,
                session.grade_band.as_str(),
                session.duration.to_string().as_str(),
                session.periods.as_str(),
                self_study,
                session.preparation_time.as_str(),
                session.exam_time.as_str(),
                proctor,
                session.subject.as_str(),
                info.head_count().to_string().as_str(),
                info.students.to_string().as_str(),
            ])
            .map_err(|err| ApiError::Internal {
                message: format!("CSV serialization failed: {err}"),
            })?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|err| ApiError::Internal {
        message: format!("CSV serialization failed: {err}"),
    })?;
    let report: String = String::from_utf8(bytes).map_err(|err| ApiError::Internal {
        message: format!("CSV output was not valid UTF-8: {err}"),
    })?;

    debug!(rows = records.len(), "Built proctor report");
    Ok(report)
}

/// Derives the attachment filename for a report.
///
/// The full report has a fixed name; per-grade-band reports embed the band
/// with spaces replaced and apostrophes stripped.
#[must_use]
pub fn report_filename(grade_band: Option<&str>) -> String {
    grade_band.map_or_else(
        || String::from("midterm_exam_proctor_assignments.csv"),
        |band| {
            let cleaned: String = band.replace(' ', "_").replace('\'', "");
            format!("midterm_exam_{cleaned}.csv")
        },
    )
}
