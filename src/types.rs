use std::fmt;

use chrono::NaiveDate;

/// The reporting period.
///
/// Kept as a pair so the inverted-range check lives next to the data it
/// validates. Both dates are plain calendar dates — a sales report has
/// no use for time zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// True when start falls strictly after end. A same-day range is fine.
    pub fn is_inverted(self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Page orientation. Portrait unless the builder flips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "Portrait"),
            Orientation::Landscape => write!(f, "Landscape"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_range_displays_both_ends() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        assert_eq!(range.to_string(), "2024-01-01 to 2024-01-31");
    }

    #[test]
    fn inverted_is_strict() {
        let same_day = DateRange::new(date(2024, 3, 15), date(2024, 3, 15));
        assert!(!same_day.is_inverted());

        let backwards = DateRange::new(date(2024, 3, 16), date(2024, 3, 15));
        assert!(backwards.is_inverted());
    }

    #[test]
    fn orientation_defaults_to_portrait() {
        assert_eq!(Orientation::default(), Orientation::Portrait);
        assert_eq!(Orientation::Landscape.to_string(), "Landscape");
    }
}
