//! String and number formatting helpers used by list and detail views.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

use time::Date;
use time::macros::format_description;

/// Final component of a `/` or `\` separated path.
#[must_use]
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeUnit {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
}

impl SizeUnit {
    const ORDER: [Self; 6] =
        [Self::Byte, Self::Kilobyte, Self::Megabyte, Self::Gigabyte, Self::Terabyte, Self::Petabyte];

    #[must_use]
    pub fn short(self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kilobyte => "KB",
            Self::Megabyte => "MB",
            Self::Gigabyte => "GB",
            Self::Terabyte => "TB",
            Self::Petabyte => "PB",
        }
    }

    /// Digits shown after the decimal point for this unit.
    #[must_use]
    pub fn fractional_digits(self) -> usize {
        match self {
            Self::Byte | Self::Kilobyte | Self::Megabyte => 0,
            Self::Gigabyte => 1,
            Self::Terabyte | Self::Petabyte => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FileSize {
    pub size: f64,
    pub unit: SizeUnit,
}

/// Scale a byte count into the largest unit that keeps the value at least 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn file_size(bytes: u64) -> FileSize {
    let mut size = bytes as f64;
    let mut index = 0;
    while size >= 1024.0 && index + 1 < SizeUnit::ORDER.len() {
        size /= 1024.0;
        index += 1;
    }
    FileSize { size, unit: SizeUnit::ORDER[index] }
}

#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    let FileSize { size, unit } = file_size(bytes);
    format!("{size:.prec$} {}", unit.short(), prec = unit.fractional_digits())
}

/// `HH:MM:SS`, with the hour field dropped when zero.
#[must_use]
pub fn seconds_to_timestamp(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours == 0 {
        format!("{minutes:02}:{secs:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    }
}

/// Parse `s`, `m:s` or `h:m:s` into seconds.
#[must_use]
pub fn timestamp_to_seconds(timestamp: &str) -> Option<u64> {
    let trimmed = timestamp.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut total: u64 = 0;
    for part in parts {
        let value = part.trim().parse::<u64>().ok()?;
        total = total.checked_mul(60)?.checked_add(value)?;
    }
    Some(total)
}

/// Resolution label for a video or image, judged on its shorter side.
#[must_use]
pub fn resolution(width: u32, height: u32) -> Option<&'static str> {
    const LABELS: [(u32, &str); 14] = [
        (6144, "HUGE"),
        (3840, "8K"),
        (3584, "7K"),
        (3000, "6K"),
        (2560, "5K"),
        (1920, "4K"),
        (1440, "1440p"),
        (1080, "1080p"),
        (720, "720p"),
        (540, "540p"),
        (480, "480p"),
        (360, "360p"),
        (240, "240p"),
        (144, "144p"),
    ];

    let short_side = width.min(height);
    LABELS.iter().find(|(min, _)| short_side >= *min).map(|(_, label)| *label)
}

/// Make a user-entered URL absolute.
///
/// URLs that already carry an `http(s)` scheme pass through. With a
/// `site_host`, a URL starting with that host gets a scheme and anything else
/// is treated as a path on the site. Without one, `https://` is prefixed.
#[must_use]
pub fn sanitise_url(url: &str, site_host: Option<&str>) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_owned();
    }
    if let Some(host) = site_host.filter(|h| !h.is_empty()) {
        if !trimmed.starts_with(host) {
            let path = trimmed.trim_start_matches('/');
            return format!("https://{host}/{path}");
        }
    }
    format!("https://{trimmed}")
}

/// Whole years elapsed from `birthdate` to `on`; `None` if `on` precedes it.
#[must_use]
pub fn age(birthdate: Date, on: Date) -> Option<i32> {
    if on < birthdate {
        return None;
    }
    let mut years = on.year() - birthdate.year();
    if (u8::from(on.month()), on.day()) < (u8::from(birthdate.month()), birthdate.day()) {
        years -= 1;
    }
    Some(years)
}

/// [`age`] over `YYYY-MM-DD` strings.
#[must_use]
pub fn age_from_str(birthdate: &str, on: &str) -> Option<i32> {
    let format = format_description!("[year]-[month]-[day]");
    let birth = Date::parse(birthdate.trim(), format).ok()?;
    let on = Date::parse(on.trim(), format).ok()?;
    age(birth, on)
}

/// `snake_case` or `kebab-case` to space-separated `Title Case`.
#[must_use]
pub fn capitalize(value: &str) -> String {
    value
        .split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
