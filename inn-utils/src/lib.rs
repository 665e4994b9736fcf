//! Shared utility functions for the inn booking crates.

/// Date utility functions
pub mod dates {
    use chrono::{Local, Months, NaiveDate};

    /// Display format used by the picker and the form fields.
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Today's date in the browser (or host) local time zone.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Add `months` calendar months to `date`.
    ///
    /// The day of month is clamped to the end of the target month,
    /// so Nov 30 + 3 months is the last day of February.
    pub fn add_months(date: NaiveDate, months: u32) -> anyhow::Result<NaiveDate> {
        date.checked_add_months(Months::new(months))
            .ok_or_else(|| anyhow::anyhow!("{} + {} months is out of range", date, months))
    }

    /// Last bookable day for a window of `months` starting at `today`.
    pub fn booking_horizon(today: NaiveDate, months: u32) -> anyhow::Result<NaiveDate> {
        add_months(today, months)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_add_months_same_day() {
            let jan15 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
            let apr15 = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
            assert_eq!(add_months(jan15, 3).unwrap(), apr15);
        }

        #[test]
        fn test_add_months_clamps_to_month_end() {
            let nov30 = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
            assert_eq!(
                add_months(nov30, 3).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
            );

            // Leap year keeps Feb 29
            let nov30_2023 = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
            assert_eq!(
                add_months(nov30_2023, 3).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
            );
        }

        #[test]
        fn test_add_months_crosses_year() {
            let oct31 = NaiveDate::from_ymd_opt(2024, 10, 31).unwrap();
            assert_eq!(
                booking_horizon(oct31, 3).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
            );
        }

        #[test]
        fn test_add_months_overflow() {
            assert!(add_months(NaiveDate::MAX, 1).is_err());
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2024-06-01");
            assert_eq!(parse_date(&formatted).unwrap(), date);
            assert!(parse_date("2024/06/01").is_err());
        }
    }
}
