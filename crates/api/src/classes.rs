// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Class timetable shaping.

use crate::request_response::{ClassTimetableResponse, CourseEntry};
use std::collections::BTreeMap;
use timetable_domain::{ClassInfo, CourseRow, Weekday};

/// Builds a class timetable response from its course rows.
///
/// Rows are grouped per weekday and sorted by period; every weekday is
/// present in the output, empty days included, so the grid renders a full
/// week.
#[must_use]
pub fn build_class_timetable_response(
    class_name: String,
    rows: &[CourseRow],
) -> ClassTimetableResponse {
    let mut timetable: BTreeMap<Weekday, Vec<CourseEntry>> = Weekday::ALL
        .iter()
        .map(|day| (*day, Vec::new()))
        .collect();

    for row in rows {
        if let Some(day_entries) = timetable.get_mut(&row.day) {
            day_entries.push(CourseEntry {
                period: row.period,
                time: row.time.clone(),
                teacher: row.teacher.clone(),
                classroom: row.classroom.clone(),
            });
        }
    }

    for day_entries in timetable.values_mut() {
        day_entries.sort_by_key(|entry| entry.period);
    }

    ClassTimetableResponse {
        class_name,
        timetable,
    }
}

/// Extracts the sorted class names from class records.
#[must_use]
pub fn class_names(classes: &[ClassInfo]) -> Vec<String> {
    let mut names: Vec<String> = classes
        .iter()
        .map(|class| class.class_name.clone())
        .collect();
    names.sort();
    names
}
