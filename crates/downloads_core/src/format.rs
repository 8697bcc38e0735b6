use crate::item::FileSize;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Human-readable size label.
///
/// Byte counts (and numeric strings) are scaled by powers of 1024 up to GB
/// and rounded to `decimals` places with trailing zeros dropped. Labels that
/// are already formatted, such as `"1.2 MB"`, pass through unchanged.
pub fn format_bytes(size: Option<&FileSize>, decimals: usize) -> String {
    let bytes = match size {
        None => return zero(),
        Some(FileSize::Bytes(bytes)) => *bytes as f64,
        Some(FileSize::Text(text)) if text.is_empty() => return zero(),
        Some(FileSize::Text(text)) => match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return text.clone(),
        },
    };
    if bytes <= 0.0 {
        return zero();
    }

    let exponent = (bytes.ln() / STEP.ln()).floor().clamp(0.0, (UNITS.len() - 1) as f64);
    let scaled = bytes / STEP.powi(exponent as i32);
    let factor = 10f64.powi(decimals.min(15) as i32);
    let rounded = (scaled * factor).round() / factor;
    format!("{} {}", rounded, UNITS[exponent as usize])
}

fn zero() -> String {
    "0 B".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(n: u64) -> Option<FileSize> {
        Some(FileSize::Bytes(n))
    }

    #[test]
    fn missing_and_zero_sizes_render_as_zero_bytes() {
        assert_eq!(format_bytes(None, 0), "0 B");
        assert_eq!(format_bytes(bytes(0).as_ref(), 0), "0 B");
        assert_eq!(format_bytes(Some(&FileSize::Text(String::new())), 0), "0 B");
    }

    #[test]
    fn scales_by_powers_of_1024() {
        assert_eq!(format_bytes(bytes(500).as_ref(), 0), "500 B");
        assert_eq!(format_bytes(bytes(2048).as_ref(), 0), "2 KB");
        assert_eq!(format_bytes(bytes(3 * 1024 * 1024).as_ref(), 0), "3 MB");
        assert_eq!(format_bytes(bytes(5 * 1024 * 1024 * 1024).as_ref(), 0), "5 GB");
    }

    #[test]
    fn rounds_to_requested_decimals() {
        assert_eq!(format_bytes(bytes(1536).as_ref(), 0), "2 KB");
        assert_eq!(format_bytes(bytes(1536).as_ref(), 1), "1.5 KB");
        assert_eq!(format_bytes(bytes(2048).as_ref(), 2), "2 KB");
    }

    #[test]
    fn units_stop_at_gigabytes() {
        let tb = 1024u64.pow(4);
        assert_eq!(format_bytes(bytes(2 * tb).as_ref(), 0), "2048 GB");
    }

    #[test]
    fn numeric_strings_are_scaled_and_labels_pass_through() {
        assert_eq!(format_bytes(Some(&FileSize::Text("2048".into())), 0), "2 KB");
        assert_eq!(format_bytes(Some(&FileSize::Text("1.2 MB".into())), 0), "1.2 MB");
    }
}
