// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Category, UnifiedWeeklySchedule, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Aggregate counts over a unified weekly schedule.
///
/// Fully derivable from the unified schedule alone; recomputing from the
/// same schedule always yields the same statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableStats {
    /// Total entries across all day/period slots.
    pub total_classes: usize,
    /// Entries sourced from the english schedule.
    pub english_classes: usize,
    /// Entries sourced from the homeroom schedule.
    pub homeroom_classes: usize,
    /// Entries sourced from the EV & myReading schedule.
    pub ev_myreading_classes: usize,
    /// Distinct weekdays (0-5) having at least one non-empty slot.
    pub days_with_classes: usize,
}

/// Computes statistics over a unified weekly schedule.
///
/// Every entry increments `total_classes` and exactly one per-category
/// counter. A weekday contributes at most 1 to `days_with_classes`
/// regardless of how many periods or entries it has. An entirely empty
/// schedule yields all-zero statistics.
#[must_use]
pub fn compute_stats(unified: &UnifiedWeeklySchedule) -> TimetableStats {
    let mut stats: TimetableStats = TimetableStats::default();
    let mut days_with_classes: BTreeSet<Weekday> = BTreeSet::new();

    for (day, slots) in unified {
        for entries in slots.values() {
            if entries.is_empty() {
                continue;
            }
            days_with_classes.insert(*day);

            for entry in entries {
                stats.total_classes += 1;
                match entry.class_type {
                    Category::English => stats.english_classes += 1,
                    Category::Homeroom => stats.homeroom_classes += 1,
                    Category::EvMyReading => stats.ev_myreading_classes += 1,
                }
            }
        }
    }

    stats.days_with_classes = days_with_classes.len();
    stats
}
