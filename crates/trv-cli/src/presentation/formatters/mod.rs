use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Hours as `"13h"`, or `"2d 5h"` from one day up.
pub fn format_hours(hours: i64) -> String {
    if hours < 24 {
        format!("{}h", hours)
    } else if hours % 24 == 0 {
        format!("{}d", hours / 24)
    } else {
        format!("{}d {}h", hours / 24, hours % 24)
    }
}

/// Display form of a record name; empty names are marked.
pub fn format_name(name: &str) -> &str {
    if name.is_empty() { "(unnamed)" } else { name }
}

pub fn format_source(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0), "0h");
        assert_eq!(format_hours(23), "23h");
        assert_eq!(format_hours(48), "2d");
        assert_eq!(format_hours(53), "2d 5h");
    }

    #[test]
    fn test_format_name() {
        assert_eq!(format_name(""), "(unnamed)");
        assert_eq!(format_name("Utor"), "Utor");
    }
}
