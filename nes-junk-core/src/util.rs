/// Format a byte count as a human-readable size string (e.g., "512 B", "8 KB").
///
/// Divides by 1024 for as long as the value stays exact, stopping at MB.
/// Zero is rendered as a bare "0".
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];

    if bytes == 0 {
        return "0".to_string();
    }

    let mut n = bytes;
    let mut unit = 0;
    while unit < UNITS.len() - 1 && n % 1024 == 0 {
        n /= 1024;
        unit += 1;
    }
    format!("{} {}", n, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(4096), "4 KB");
        assert_eq!(format_bytes(16384), "16 KB");
        assert_eq!(format_bytes(262144), "256 KB");
        assert_eq!(format_bytes(1048576), "1 MB");
        assert_eq!(format_bytes(1536), "1536 B");
        assert_eq!(format_bytes(1025), "1025 B");
    }

    #[test]
    fn test_format_bytes_stops_at_mb() {
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1024 MB");
    }
}
