/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format ISO date string to "Mon D, YYYY" display format
/// Example: "2025-06-29" or "2025-06-29T14:02:26Z" -> "Jun 29, 2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            if let (Ok(m), Ok(d)) = (month.parse::<usize>(), day.parse::<u32>()) {
                if (1..=12).contains(&m) {
                    return format!("{} {}, {}", MONTHS[m - 1], d, year);
                }
            }
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-06-29"), "Jun 29, 2025");
        assert_eq!(format_date("2025-06-05T14:02:26.123Z"), "Jun 5, 2025");
        assert_eq!(format_date("2024-12-31"), "Dec 31, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2025-13-01"), "2025-13-01");
    }
}
