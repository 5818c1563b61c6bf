// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity search filtering.
//!
//! Autocomplete-style search is a case-insensitive substring match over a
//! raw entity list: one linear scan, no index structure. The scale (low
//! thousands of records) makes this acceptable.

use crate::types::Student;

/// Maximum number of results a search returns.
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// Returns whether the query is a case-insensitive substring of any field.
#[must_use]
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle: String = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filters students whose id or name contains the query.
///
/// An empty or whitespace-only query yields no results. Results are capped
/// at [`SEARCH_RESULT_LIMIT`] in input order.
#[must_use]
pub fn search_students<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    let trimmed: &str = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    students
        .iter()
        .filter(|student| {
            matches_query(
                trimmed,
                &[student.student_id.as_str(), student.student_name.as_str()],
            )
        })
        .take(SEARCH_RESULT_LIMIT)
        .collect()
}

/// Filters a name list (teachers, classes, classrooms) by the query.
///
/// Same contract as [`search_students`].
#[must_use]
pub fn search_names<'a>(names: &'a [String], query: &str) -> Vec<&'a String> {
    let trimmed: &str = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    names
        .iter()
        .filter(|name| matches_query(trimmed, &[name.as_str()]))
        .take(SEARCH_RESULT_LIMIT)
        .collect()
}
