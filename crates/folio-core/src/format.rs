//! Display formatting for card text.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Seconds as `m:ss` (`0:00` for zero). Hours fold into minutes.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Compact view count: `1.2M`, `3.4K`, or the grouped integer.
///
/// Separators in the input are ignored; input that isn't a number is
/// returned unchanged.
pub fn format_view_count(views: &str) -> String {
    let trimmed = views.trim();
    if trimmed.is_empty() {
        return "0".to_string();
    }
    let Ok(count) = trimmed.replace(',', "").parse::<u64>() else {
        return views.to_string();
    };

    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        group_thousands(count)
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cuts `text` to at most `max_chars` characters, preferring the last word
/// boundary, and appends `...`. Short text is returned as is.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(space) if space > 0 => format!("{}...", &cut[..space]),
        _ => format!("{cut}..."),
    }
}

/// Up to two uppercase initials from a person's name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// `mailto:` link with an encoded subject and body.
pub fn email_link(subject: &str, body: &str, email: &str) -> String {
    format!(
        "mailto:{email}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Removes HTML tags and trims the result.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Human date (`Jan 5, 2025`) from RFC 3339, `YYYY-MM-DD HH:MM:SS` or
/// `YYYY-MM-DD`; anything else is returned unchanged.
pub fn format_published_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(3725), "62:05");
    }

    #[test]
    fn test_format_view_count() {
        assert_eq!(format_view_count(""), "0");
        assert_eq!(format_view_count("999"), "999");
        assert_eq!(format_view_count("1500"), "1.5K");
        assert_eq!(format_view_count("1,234,567"), "1.2M");
        assert_eq!(format_view_count("n/a"), "n/a");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_truncate_text_at_word_boundary() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("hello brave new world", 12), "hello brave...");
        assert_eq!(truncate_text("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada lovelace byron"), "AL");
        assert_eq!(initials("Grace"), "G");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_email_link_encodes_parts() {
        assert_eq!(
            email_link("Let's talk", "Hi,\nthere", "me@example.com"),
            "mailto:me@example.com?subject=Let%27s%20talk&body=Hi%2C%0Athere"
        );
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags("A <strong>human</strong> being "),
            "A human being"
        );
    }

    #[test]
    fn test_format_published_date() {
        assert_eq!(format_published_date("2025-01-05T10:00:00Z"), "Jan 5, 2025");
        assert_eq!(format_published_date("2024-11-30 08:15:00"), "Nov 30, 2024");
        assert_eq!(format_published_date("March 2023"), "March 2023");
    }
}
