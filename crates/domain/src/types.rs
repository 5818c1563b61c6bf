// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Represents a school weekday.
///
/// The weekday set is closed and ordered: Monday through Friday.
/// Weekend days do not exist in the domain and are rejected at the
/// deserialization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Converts this weekday to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Monday" => Ok(Self::Monday),
            "Tuesday" => Ok(Self::Tuesday),
            "Wednesday" => Ok(Self::Wednesday),
            "Thursday" => Ok(Self::Thursday),
            "Friday" => Ok(Self::Friday),
            _ => Err(DomainError::InvalidWeekday(s.to_string())),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a schedule category.
///
/// Each student belongs to up to three parallel schedules. The declaration
/// order of the variants is the precedence order used when merging slots:
/// english first, then homeroom, then the EV & myReading enrichment course.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    /// English class.
    #[serde(rename = "english")]
    English,
    /// Homeroom (lead teacher) class.
    #[serde(rename = "homeroom")]
    Homeroom,
    /// EV & myReading enrichment course.
    #[serde(rename = "ev_myreading")]
    EvMyReading,
}

impl Category {
    /// All categories in merge precedence order.
    pub const ALL: [Self; 3] = [Self::English, Self::Homeroom, Self::EvMyReading];

    /// Converts this category to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Homeroom => "homeroom",
            Self::EvMyReading => "ev_myreading",
        }
    }

    /// Parses a category from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid category.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "english" => Ok(Self::English),
            "homeroom" => Ok(Self::Homeroom),
            "ev_myreading" => Ok(Self::EvMyReading),
            _ => Err(DomainError::InvalidCategory(format!(
                "Unknown category: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One concrete class occurrence within a schedule slot.
///
/// All fields are display data supplied by upstream schedule sources.
/// `teacher` and `classroom` may be empty strings; `subject` and
/// `course_name` are both optional because the upstream feeds disagree on
/// which of the two they populate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Subject label (e.g. "English - G3 Pioneers").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Course name label; some sources fill this instead of `subject`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    /// Teaching staff for this occurrence. May be empty.
    #[serde(default)]
    pub teacher: String,
    /// Room for this occurrence. May be empty.
    #[serde(default)]
    pub classroom: String,
    /// Display time range ("HH:MM-HH:MM"), when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Echo of the raw period key this entry was found under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// One day of a single-category schedule, keyed by the *raw* period key.
///
/// Raw keys are strings as delivered by the schedule source: a plain number
/// ("3") or a decorated form embedding extra notation ("(3)10:20-11:00").
/// At most one entry exists per raw key, but several raw keys may resolve
/// to the same canonical period.
pub type DaySchedule = BTreeMap<String, ScheduleEntry>;

/// A single-category weekly schedule: weekday to day schedule.
pub type WeeklySchedule = BTreeMap<Weekday, DaySchedule>;

/// The up-to-three per-category weekly schedules for one entity.
///
/// This is the merger's input. Any of the three may be absent from the
/// source JSON; an absent category deserializes as an empty schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySchedules {
    /// English class schedule.
    #[serde(default)]
    pub english_timetable: WeeklySchedule,
    /// Homeroom schedule.
    #[serde(default)]
    pub homeroom_timetable: WeeklySchedule,
    /// EV & myReading enrichment schedule.
    #[serde(default)]
    pub ev_myreading_timetable: WeeklySchedule,
}

impl CategorySchedules {
    /// Returns the schedule for one category.
    #[must_use]
    pub const fn schedule_for(&self, category: Category) -> &WeeklySchedule {
        match category {
            Category::English => &self.english_timetable,
            Category::Homeroom => &self.homeroom_timetable,
            Category::EvMyReading => &self.ev_myreading_timetable,
        }
    }

    /// Returns a mutable reference to the schedule for one category.
    #[must_use]
    pub const fn schedule_for_mut(&mut self, category: Category) -> &mut WeeklySchedule {
        match category {
            Category::English => &mut self.english_timetable,
            Category::Homeroom => &mut self.homeroom_timetable,
            Category::EvMyReading => &mut self.ev_myreading_timetable,
        }
    }
}

/// A schedule entry tagged with the category it was sourced from.
///
/// Produced exclusively by the merger; every entry in a unified schedule
/// carries exactly one category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEntry {
    /// The underlying entry, shallow-copied from its source schedule.
    #[serde(flatten)]
    pub entry: ScheduleEntry,
    /// The category this entry was sourced from.
    pub class_type: Category,
}

/// One day of the unified schedule: canonical period number to the ordered
/// list of entries occupying that slot.
///
/// A period key is present only when its entry list is non-empty.
pub type UnifiedDaySchedule = BTreeMap<u8, Vec<TaggedEntry>>;

/// The merged weekly view showing all categories' entries together.
pub type UnifiedWeeklySchedule = BTreeMap<Weekday, UnifiedDaySchedule>;

/// Represents a student.
///
/// `student_id` is the unique identifier. Every student has an english
/// class and a homeroom class; the enrichment class is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// The unique student identifier.
    pub student_id: String,
    /// The student's display name.
    pub student_name: String,
    /// The english class this student belongs to.
    pub english_class_name: String,
    /// The homeroom class this student belongs to.
    pub home_room_class_name: String,
    /// The EV & myReading class, when the student takes the course.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ev_myreading_class_name: Option<String>,
}

/// One english-timetable lesson row.
///
/// The english timetable also carries the EV & myReading lessons, keyed by
/// a different class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishLesson {
    /// The weekday this lesson occurs on.
    pub day: Weekday,
    /// The raw period key as delivered by the source data.
    pub period: String,
    /// The room.
    pub classroom: String,
    /// The teacher.
    pub teacher: String,
    /// The class this lesson belongs to.
    pub class_name: String,
}

/// One homeroom-timetable lesson row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeroomLesson {
    /// The homeroom class this lesson belongs to.
    pub home_room_class_name: String,
    /// The weekday this lesson occurs on.
    pub day: Weekday,
    /// The raw period key as delivered by the source data.
    pub period: String,
    /// The room.
    pub classroom: String,
    /// The teacher.
    pub teacher: String,
    /// The course taught in this slot.
    pub course_name: String,
}

/// One row of the general course timetable.
///
/// This table backs class, teacher and classroom lookups and always carries
/// a clean numeric period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRow {
    /// The weekday.
    pub day: Weekday,
    /// The period number (1-8).
    pub period: u8,
    /// Display time range (e.g. "8:25-9:05").
    pub time: String,
    /// The room.
    pub classroom: String,
    /// The teacher.
    pub teacher: String,
    /// The class.
    pub class_name: String,
}

/// Class reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// The unique class name (e.g. "G1 Visionaries").
    pub class_name: String,
    /// The grade the class belongs to (e.g. "G1").
    pub grade: String,
}

/// Period reference record: number plus its wall-clock bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// The period number.
    pub period_number: u8,
    /// Display time range (e.g. "8:25-9:05").
    pub time_range: String,
    /// Start of period ("8:25").
    pub start_time: String,
    /// End of period ("9:05").
    pub end_time: String,
}
