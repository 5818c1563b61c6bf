// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Category, CategorySchedules, DaySchedule, ScheduleEntry, UnifiedWeeklySchedule, Weekday,
    WeeklySchedule, has_any_entries, merge_timetables,
};

fn entry(teacher: &str) -> ScheduleEntry {
    ScheduleEntry {
        teacher: String::from(teacher),
        classroom: String::from("E101"),
        ..ScheduleEntry::default()
    }
}

fn day_schedule(slots: &[(&str, &str)]) -> DaySchedule {
    slots
        .iter()
        .map(|(raw_key, teacher)| (String::from(*raw_key), entry(teacher)))
        .collect()
}

fn weekly(day: Weekday, slots: &[(&str, &str)]) -> WeeklySchedule {
    let mut schedule: WeeklySchedule = WeeklySchedule::new();
    schedule.insert(day, day_schedule(slots));
    schedule
}

#[test]
fn test_empty_input_yields_empty_unified_schedule() {
    let schedules: CategorySchedules = CategorySchedules::default();

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    assert!(unified.values().all(std::collections::BTreeMap::is_empty));
    assert!(!has_any_entries(&unified));
}

#[test]
fn test_union_of_two_categories_in_same_slot() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Monday, &[("1", "A")]),
        homeroom_timetable: weekly(Weekday::Monday, &[("1", "B")]),
        ev_myreading_timetable: WeeklySchedule::new(),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    let slot = &unified[&Weekday::Monday][&1];
    assert_eq!(slot.len(), 2);
    assert_eq!(slot[0].entry.teacher, "A");
    assert_eq!(slot[0].class_type, Category::English);
    assert_eq!(slot[1].entry.teacher, "B");
    assert_eq!(slot[1].class_type, Category::Homeroom);
}

#[test]
fn test_slot_ordering_follows_category_precedence() {
    // Insert in reverse precedence order; output order must not care.
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Wednesday, &[("4", "english teacher")]),
        homeroom_timetable: weekly(Weekday::Wednesday, &[("4", "homeroom teacher")]),
        ev_myreading_timetable: weekly(Weekday::Wednesday, &[("4", "reading teacher")]),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    let slot = &unified[&Weekday::Wednesday][&4];
    let order: Vec<Category> = slot.iter().map(|tagged| tagged.class_type).collect();
    assert_eq!(
        order,
        vec![Category::English, Category::Homeroom, Category::EvMyReading]
    );
}

#[test]
fn test_disjoint_periods_produce_separate_slots() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Monday, &[("1", "A")]),
        homeroom_timetable: weekly(Weekday::Monday, &[("2", "B")]),
        ev_myreading_timetable: WeeklySchedule::new(),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    let monday = &unified[&Weekday::Monday];
    assert_eq!(monday.len(), 2);
    assert_eq!(monday[&1].len(), 1);
    assert_eq!(monday[&2].len(), 1);
}

#[test]
fn test_decorated_and_plain_keys_merge_into_same_period() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Tuesday, &[("(3)10:20-11:00", "A")]),
        homeroom_timetable: weekly(Weekday::Tuesday, &[("3", "B")]),
        ev_myreading_timetable: WeeklySchedule::new(),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    let tuesday = &unified[&Weekday::Tuesday];
    assert_eq!(tuesday.len(), 1);
    let slot = &tuesday[&3];
    assert_eq!(slot.len(), 2);
    assert_eq!(slot[0].class_type, Category::English);
    assert_eq!(slot[1].class_type, Category::Homeroom);
}

#[test]
fn test_unparseable_period_key_drops_entry() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Monday, &[("lunch", "A"), ("2", "B")]),
        homeroom_timetable: WeeklySchedule::new(),
        ev_myreading_timetable: WeeklySchedule::new(),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    let monday = &unified[&Weekday::Monday];
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[&2][0].entry.teacher, "B");
}

#[test]
fn test_no_cross_day_leakage() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Wednesday, &[("5", "A")]),
        homeroom_timetable: WeeklySchedule::new(),
        ev_myreading_timetable: WeeklySchedule::new(),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    for day in Weekday::ALL {
        if day == Weekday::Wednesday {
            assert!(unified.contains_key(&day));
        } else {
            assert!(!unified.contains_key(&day));
        }
    }
}

#[test]
fn test_every_output_entry_carries_its_source_category() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Monday, &[("1", "english teacher")]),
        homeroom_timetable: weekly(Weekday::Tuesday, &[("2", "homeroom teacher")]),
        ev_myreading_timetable: weekly(Weekday::Friday, &[("7", "reading teacher")]),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    assert_eq!(
        unified[&Weekday::Monday][&1][0].class_type,
        Category::English
    );
    assert_eq!(
        unified[&Weekday::Tuesday][&2][0].class_type,
        Category::Homeroom
    );
    assert_eq!(
        unified[&Weekday::Friday][&7][0].class_type,
        Category::EvMyReading
    );
}

#[test]
fn test_same_category_duplicate_canonical_periods_both_kept() {
    // Two raw keys in one category resolving to period 3: co-taught slot,
    // not a collision to discard.
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Monday, &[("(3)08:30-09:10", "A"), ("3", "B")]),
        homeroom_timetable: WeeklySchedule::new(),
        ev_myreading_timetable: WeeklySchedule::new(),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    let slot = &unified[&Weekday::Monday][&3];
    assert_eq!(slot.len(), 2);
    assert!(slot.iter().all(|tagged| tagged.class_type == Category::English));
}

#[test]
fn test_merge_is_deterministic() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Monday, &[("1", "A"), ("(2)09:15", "B")]),
        homeroom_timetable: weekly(Weekday::Monday, &[("2", "C")]),
        ev_myreading_timetable: weekly(Weekday::Thursday, &[("6", "D")]),
    };

    let first: UnifiedWeeklySchedule = merge_timetables(&schedules);
    let second: UnifiedWeeklySchedule = merge_timetables(&schedules);

    assert_eq!(first, second);
}

#[test]
fn test_merge_does_not_mutate_inputs() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Monday, &[("1", "A")]),
        homeroom_timetable: weekly(Weekday::Monday, &[("1", "B")]),
        ev_myreading_timetable: WeeklySchedule::new(),
    };
    let before: CategorySchedules = schedules.clone();

    let _unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    assert_eq!(schedules, before);
}

#[test]
fn test_has_any_entries_detects_single_entry() {
    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: weekly(Weekday::Friday, &[("8", "A")]),
        homeroom_timetable: WeeklySchedule::new(),
        ev_myreading_timetable: WeeklySchedule::new(),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    assert!(has_any_entries(&unified));
}

#[test]
fn test_entry_fields_survive_merge_unchanged() {
    let mut source_entry: ScheduleEntry = entry("A");
    source_entry.subject = Some(String::from("English - G3 Pioneers"));
    source_entry.time = Some(String::from("10:20-11:00"));

    let mut day: DaySchedule = DaySchedule::new();
    day.insert(String::from("3"), source_entry.clone());
    let mut english: WeeklySchedule = WeeklySchedule::new();
    english.insert(Weekday::Tuesday, day);

    let schedules: CategorySchedules = CategorySchedules {
        english_timetable: english,
        homeroom_timetable: WeeklySchedule::new(),
        ev_myreading_timetable: WeeklySchedule::new(),
    };

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);

    assert_eq!(unified[&Weekday::Tuesday][&3][0].entry, source_entry);
}
