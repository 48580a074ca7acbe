//! Weekly availability definitions.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A day of the week, serialized as its English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// Weekly availability of a handyman.
///
/// `days` has set semantics: no duplicates, order not significant. The two
/// times are independent; either may be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Days of the week the handyman is available.
    pub days: Vec<Weekday>,
    /// Start of the daily availability window.
    pub start_time: Option<NaiveTime>,
    /// End of the daily availability window.
    pub end_time: Option<NaiveTime>,
}

impl Availability {
    /// Creates an empty availability: no days, no time window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a day in or out of the set (symmetric difference).
    pub fn toggle_day(&mut self, day: Weekday) {
        if let Some(pos) = self.days.iter().position(|d| *d == day) {
            self.days.remove(pos);
        } else {
            self.days.push(day);
        }
    }

    /// Checks whether a day is in the set.
    pub fn has_day(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Removes duplicate days, keeping first occurrences.
    pub fn dedup_days(&mut self) {
        let mut seen = Vec::with_capacity(self.days.len());
        self.days.retain(|d| {
            if seen.contains(d) {
                false
            } else {
                seen.push(*d);
                true
            }
        });
    }
}
