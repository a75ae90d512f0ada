use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration};

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Day-granularity calendar date in ISO `YYYY-MM-DD` text form.
///
/// No time-of-day component: price lookups and buy events are keyed by
/// whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradeDate(Date);

impl TradeDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, ISO_DATE)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub const fn from_date(value: Date) -> Self {
        Self(value)
    }

    /// The date `days` whole days later, or `None` past the calendar range.
    pub fn plus_days(self, days: u32) -> Option<Self> {
        self.0.checked_add(Duration::days(i64::from(days))).map(Self)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("TradeDate must be ISO formattable")
    }
}

impl Display for TradeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradeDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let parsed = TradeDate::parse("2025-06-28").expect("must parse");
        assert_eq!(parsed.format_iso(), "2025-06-28");
    }

    #[test]
    fn rejects_non_iso_date() {
        let err = TradeDate::parse("28-06-2025").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn adds_whole_days_across_month_boundary() {
        let start = TradeDate::parse("2025-06-28").expect("must parse");
        let next = start.plus_days(14).expect("in range");
        assert_eq!(next.format_iso(), "2025-07-12");
    }

    #[test]
    fn orders_chronologically() {
        let earlier = TradeDate::parse("2025-06-28").expect("must parse");
        let later = TradeDate::parse("2025-07-04").expect("must parse");
        assert!(earlier < later);
    }
}
