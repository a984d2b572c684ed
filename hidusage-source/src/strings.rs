//! Device string helpers

/// Wide-character limit for manufacturer, product and serial strings
pub const MAX_DEVICE_STRING_CHARS: usize = 128;

/// Trim leading/trailing NULs and clamp to the device string buffer size
pub fn trim_device_string(raw: &str) -> String {
    raw.trim_matches('\0')
        .chars()
        .take(MAX_DEVICE_STRING_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_nuls() {
        assert_eq!(trim_device_string("\0\0APC\0\0\0"), "APC");
        assert_eq!(trim_device_string("Back-UPS ES"), "Back-UPS ES");
    }

    #[test]
    fn clamps_length() {
        let long = "x".repeat(300);
        assert_eq!(trim_device_string(&long).len(), MAX_DEVICE_STRING_CHARS);
    }
}
