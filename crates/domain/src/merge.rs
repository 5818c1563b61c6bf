// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timetable merging.
//!
//! This module consolidates the up-to-three per-category weekly schedules
//! of one entity into a single day-by-period grid, tagging every entry with
//! the category it came from.
//!
//! The unified schedule is **computed**, not stored. It's a pure function
//! of its input: no I/O, no clock, no mutation of the source schedules.
//!
//! ## Invariants
//!
//! - A period key appears in the output only when its entry list is
//!   non-empty.
//! - Entries within a slot are ordered by category precedence: english,
//!   homeroom, EV & myReading.
//! - An entry present only on one weekday never appears under another.
//! - Raw period keys that cannot be canonicalized drop their entry rather
//!   than failing the merge.

use crate::period_key::canonical_period;
use crate::types::{
    Category, CategorySchedules, TaggedEntry, UnifiedDaySchedule, UnifiedWeeklySchedule, Weekday,
};
use std::collections::BTreeSet;

/// Merges the per-category schedules into one unified weekly schedule.
///
/// For each weekday, the canonical period numbers appearing in *any*
/// category are unioned; each period's slot list is then built by
/// appending, in category precedence order, every entry of that category
/// whose raw key canonicalizes to the period. Two raw keys in the same
/// category that resolve to the same period both remain listed — multiple
/// simultaneous classes are an expected modeling case (e.g. co-taught
/// slots), not a collision to discard.
///
/// Absent or empty categories contribute nothing and never cause a
/// failure. The result is deterministic for a given input.
#[must_use]
pub fn merge_timetables(schedules: &CategorySchedules) -> UnifiedWeeklySchedule {
    let mut unified: UnifiedWeeklySchedule = UnifiedWeeklySchedule::new();

    for day in Weekday::ALL {
        // Union of canonical periods across all three categories
        let mut periods: BTreeSet<u8> = BTreeSet::new();
        for category in Category::ALL {
            if let Some(day_schedule) = schedules.schedule_for(category).get(&day) {
                for raw_key in day_schedule.keys() {
                    if let Some(period) = canonical_period(raw_key) {
                        periods.insert(period);
                    }
                }
            }
        }

        let mut day_slots: UnifiedDaySchedule = UnifiedDaySchedule::new();
        for period in periods {
            let mut entries: Vec<TaggedEntry> = Vec::new();

            for category in Category::ALL {
                if let Some(day_schedule) = schedules.schedule_for(category).get(&day) {
                    for (raw_key, entry) in day_schedule {
                        if canonical_period(raw_key) == Some(period) {
                            entries.push(TaggedEntry {
                                entry: entry.clone(),
                                class_type: category,
                            });
                        }
                    }
                }
            }

            if !entries.is_empty() {
                day_slots.insert(period, entries);
            }
        }

        if !day_slots.is_empty() {
            unified.insert(day, day_slots);
        }
    }

    unified
}

/// Returns whether the unified schedule contains any entry at all.
///
/// Drives the "no timetable data" empty state.
#[must_use]
pub fn has_any_entries(unified: &UnifiedWeeklySchedule) -> bool {
    unified
        .values()
        .any(|day| day.values().any(|slot| !slot.is_empty()))
}
