use chrono::NaiveDate;

/// Roster display format, e.g. "14 Feb 2023"
pub fn format_joined(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_joined() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 14).unwrap();
        assert_eq!(format_joined(date), "14 Feb 2023");
    }
}
