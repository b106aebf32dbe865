use chrono::{DateTime, Local, Utc};

/// Human-readable size for the history cards: base 1024, two-decimal
/// rounding with trailing zeros dropped.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exp = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exp as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exp])
}

/// Local wall-clock rendering of an attempt timestamp.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Best-effort MIME type from the file extension. The browser original got
/// this from the file object; the desktop build has to derive it.
pub fn mime_for_path(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Icon for a history card, by MIME family.
pub fn file_icon(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "\u{1F5BC}"
    } else if mime == "application/pdf" {
        "\u{1F4C4}"
    } else if mime == "text/csv" {
        "\u{1F4CA}"
    } else {
        "\u{1F4E6}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes_is_special_cased() {
        assert_eq!(format_size(0), "0 Bytes");
    }

    #[test]
    fn sizes_scale_by_1024() {
        assert_eq!(format_size(512), "512 Bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(52_428_800), "50 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn rounding_keeps_two_decimals_at_most() {
        // 1,300,000 bytes = 1.239... MB
        assert_eq!(format_size(1_300_000), "1.24 MB");
    }

    #[test]
    fn mime_lookup_covers_the_allow_list() {
        assert_eq!(mime_for_path("report.pdf"), "application/pdf");
        assert_eq!(mime_for_path("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for_path("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for_path("chart.png"), "image/png");
        assert_eq!(mime_for_path("anim.gif"), "image/gif");
        assert_eq!(mime_for_path("modern.webp"), "image/webp");
        assert_eq!(mime_for_path("data.csv"), "text/csv");
    }

    #[test]
    fn unknown_extensions_fall_back_to_octet_stream() {
        assert_eq!(mime_for_path("archive.zip"), "application/octet-stream");
        assert_eq!(mime_for_path("noextension"), "application/octet-stream");
    }
}
