//! Date helper functions

use chrono::{DateTime, Utc};

/// Format a publication date for display, e.g. "15 Mar 2021"
///
/// An absent date renders as an empty string; listing entries without a
/// first publication date simply show no date.
pub fn display_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => String::new(),
    }
}

/// Machine-readable datetime attribute for `<time>` elements
pub fn datetime_attr(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_date() {
        let date = Utc.with_ymd_and_hms(2021, 3, 15, 19, 25, 28).unwrap();
        assert_eq!(display_date(Some(&date)), "15 Mar 2021");
    }

    #[test]
    fn test_display_date_absent() {
        assert_eq!(display_date(None), "");
    }

    #[test]
    fn test_datetime_attr() {
        let date = Utc.with_ymd_and_hms(2021, 3, 15, 19, 25, 28).unwrap();
        assert_eq!(datetime_attr(Some(&date)), "2021-03-15T19:25:28+00:00");
    }
}
