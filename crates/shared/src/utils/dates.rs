use chrono::NaiveDate;
use validator::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn validate_date(value: &str) -> Result<(), ValidationError> {
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_dates() {
        let date = parse_date("2023-11-10").expect("valid date");
        assert_eq!(format_date(date), "2023-11-10");
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(parse_date("2023/11/10").is_none());
        assert!(parse_date("10-11-2023").is_none());
        assert!(parse_date("2023-2-1").is_none());
        assert!(parse_date("2023-02-30").is_none());
        assert!(parse_date("").is_none());
    }
}
