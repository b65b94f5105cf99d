//! Local time basis for calendar days
//!
//! Every instant is converted with the offset in effect at that instant,
//! so entries on either side of a DST change each land on their own
//! local day.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalZone {
    /// The machine's time zone, DST rules included
    System,
    Fixed(FixedOffset),
}

impl LocalZone {
    /// UTC offset in effect at `at`
    pub fn offset_at(&self, at: DateTime<Utc>) -> FixedOffset {
        match self {
            LocalZone::System => *at.with_timezone(&Local).offset(),
            LocalZone::Fixed(offset) => *offset,
        }
    }

    pub fn local(&self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        at.with_timezone(&self.offset_at(at))
    }

    /// Calendar day of an instant in this zone
    pub fn day_of(&self, at: DateTime<Utc>) -> NaiveDate {
        self.local(at).date_naive()
    }

    pub fn format<'a>(&self, at: DateTime<Utc>, fmt: &'a str) -> impl Display + 'a {
        self.local(at).format(fmt)
    }
}

impl From<FixedOffset> for LocalZone {
    fn from(offset: FixedOffset) -> Self {
        LocalZone::Fixed(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_zone_shifts_day() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 0, 0).unwrap();
        let new_york = LocalZone::from(FixedOffset::west_opt(5 * 3600).unwrap());

        assert_eq!(new_york.day_of(at), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(new_york.format(at, "%H:%M").to_string(), "22:00");
    }

    #[test]
    fn test_system_zone_uses_offset_of_each_instant() {
        // Winter and summer instants may carry different offsets under DST
        let winter = Utc.with_ymd_and_hms(2025, 1, 15, 23, 30, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2025, 7, 15, 23, 30, 0).unwrap();

        for at in [winter, summer] {
            let local = at.with_timezone(&Local);
            assert_eq!(LocalZone::System.offset_at(at), *local.offset());
            assert_eq!(LocalZone::System.day_of(at), local.date_naive());
        }
    }
}
