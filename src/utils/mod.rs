//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::{has_binary_extension, is_binary_file, read_file_safe, ReadError};
pub use paths::normalize_path;

/// Format a number with thousands separators (e.g. 1048576 → "1,048,576").
///
/// Used for the byte totals in the end-of-run summary.
pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let bytes = s.as_bytes();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(b as char);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::format_with_commas;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1_048_576), "1,048,576");
    }
}
