//! Formatting helpers

use chrono::{NaiveDate, NaiveDateTime};

/// Day stamp for the run banner ("Fri Oct 16 2026")
pub fn format_banner_date(now: NaiveDateTime) -> String {
    now.format("%a %b %d %Y").to_string()
}

/// Backup date as shown in listings ("2026-10-16")
pub fn format_unit_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_banner_date() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert_eq!(format_banner_date(now), "Tue Mar 05 2024");
    }

    #[test]
    fn test_format_unit_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        assert_eq!(format_unit_date(date), "2024-01-09");
    }
}
