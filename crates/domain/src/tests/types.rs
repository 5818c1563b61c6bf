// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Category, CategorySchedules, DomainError, ScheduleEntry, TaggedEntry, UnifiedWeeklySchedule,
    Weekday, merge_timetables,
};
use std::str::FromStr;

#[test]
fn test_weekday_calendar_order() {
    assert_eq!(
        Weekday::ALL,
        [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ]
    );
    assert!(Weekday::Monday < Weekday::Friday);
}

#[test]
fn test_weekday_parse_round_trip() {
    for day in Weekday::ALL {
        let parsed: Weekday = Weekday::from_str(day.as_str()).unwrap();
        assert_eq!(parsed, day);
    }
}

#[test]
fn test_weekend_day_is_rejected() {
    let result: Result<Weekday, DomainError> = Weekday::from_str("Saturday");
    assert!(matches!(result, Err(DomainError::InvalidWeekday(_))));
}

#[test]
fn test_category_wire_names() {
    assert_eq!(Category::English.as_str(), "english");
    assert_eq!(Category::Homeroom.as_str(), "homeroom");
    assert_eq!(Category::EvMyReading.as_str(), "ev_myreading");

    for category in Category::ALL {
        assert_eq!(Category::parse(category.as_str()).unwrap(), category);
    }
}

#[test]
fn test_unknown_category_is_rejected() {
    let result: Result<Category, DomainError> = Category::parse("pe");
    assert!(matches!(result, Err(DomainError::InvalidCategory(_))));
}

#[test]
fn test_category_schedules_deserializes_with_missing_categories() {
    // A category entirely absent from the payload is an empty schedule.
    let json: &str = r#"{
        "english_timetable": {
            "Monday": { "1": { "teacher": "A", "classroom": "E101" } }
        }
    }"#;

    let schedules: CategorySchedules = serde_json::from_str(json).unwrap();

    assert_eq!(schedules.english_timetable.len(), 1);
    assert!(schedules.homeroom_timetable.is_empty());
    assert!(schedules.ev_myreading_timetable.is_empty());
}

#[test]
fn test_schedule_entry_optional_fields_default() {
    let json: &str = r#"{ "teacher": "A", "classroom": "E101" }"#;

    let entry: ScheduleEntry = serde_json::from_str(json).unwrap();

    assert_eq!(entry.teacher, "A");
    assert_eq!(entry.classroom, "E101");
    assert!(entry.subject.is_none());
    assert!(entry.course_name.is_none());
    assert!(entry.time.is_none());
}

#[test]
fn test_tagged_entry_serializes_flat_with_class_type() {
    let tagged: TaggedEntry = TaggedEntry {
        entry: ScheduleEntry {
            subject: Some(String::from("Math")),
            teacher: String::from("A"),
            classroom: String::from("E101"),
            ..ScheduleEntry::default()
        },
        class_type: Category::Homeroom,
    };

    let value: serde_json::Value = serde_json::to_value(&tagged).unwrap();

    assert_eq!(value["subject"], "Math");
    assert_eq!(value["teacher"], "A");
    assert_eq!(value["class_type"], "homeroom");
    // Flattened: no nested "entry" object on the wire
    assert!(value.get("entry").is_none());
}

#[test]
fn test_unified_schedule_serializes_period_keys_as_strings() {
    let json: &str = r#"{
        "english_timetable": {
            "Monday": { "(3)10:20-11:00": { "teacher": "A", "classroom": "E101" } }
        }
    }"#;
    let schedules: CategorySchedules = serde_json::from_str(json).unwrap();

    let unified: UnifiedWeeklySchedule = merge_timetables(&schedules);
    let value: serde_json::Value = serde_json::to_value(&unified).unwrap();

    assert!(value["Monday"]["3"].is_array());
    assert_eq!(value["Monday"]["3"][0]["class_type"], "english");
}

#[test]
fn test_schedule_for_returns_matching_category() {
    let json: &str = r#"{
        "homeroom_timetable": {
            "Friday": { "2": { "teacher": "B", "classroom": "H202" } }
        }
    }"#;
    let schedules: CategorySchedules = serde_json::from_str(json).unwrap();

    assert!(schedules.schedule_for(Category::English).is_empty());
    assert_eq!(schedules.schedule_for(Category::Homeroom).len(), 1);
}
