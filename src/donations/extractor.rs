// extractor.rs
use crate::donations::models::{CampaignFields, DonationSnapshot, Extracted, ExtractionField};
use chrono::{DateTime, Local, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// How many characters after a label belong to that label's block.
pub const LABEL_WINDOW_CHARS: usize = 500;

static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)class=["']amount-number["'][^>]*?>\s*([0-9\s,.]+)\s*€"#)
        .expect("amount regex compiles")
});

static DAYS_LEFT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Plus que\s*([0-9]+)\s*jours").expect("days regex compiles"));

static DONORS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Donateurs\s*([0-9]+)").expect("donors regex compiles"));

/// Builds a snapshot from raw campaign page HTML, stamped with the current time.
pub fn extract_snapshot(html: &str, fields: &CampaignFields) -> DonationSnapshot {
    extract_snapshot_at(html, fields, Local::now())
}

/// Same as [`extract_snapshot`] with an explicit clock.
pub fn extract_snapshot_at<Tz>(
    html: &str,
    fields: &CampaignFields,
    now: DateTime<Tz>,
) -> DonationSnapshot
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    DonationSnapshot::new(
        extract_amount(html, &fields.collected),
        extract_amount(html, &fields.min_goal),
        extract_amount(html, &fields.opt_goal),
        extract_count(html, &DAYS_LEFT_RE, "daysLeft"),
        extract_count(html, &DONORS_RE, "donors"),
        format_last_updated(&now),
    )
}

/// French clock time, e.g. `14:32:07`.
pub fn format_last_updated<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("%H:%M:%S").to_string()
}

/// Label-anchored lookup of a euro amount.
pub fn extract_amount(html: &str, field: &ExtractionField) -> Extracted<f64> {
    let Some(start) = html.find(field.label) else {
        debug!(label = field.label, "label not found, using fallback");
        return Extracted::Fallback(field.fallback);
    };

    let window = label_window(&html[start..], LABEL_WINDOW_CHARS);

    let parsed = AMOUNT_RE
        .captures(window)
        .and_then(|caps| caps.get(1))
        .and_then(|m| normalize_amount(m.as_str()));

    match parsed {
        Some(value) => Extracted::Live(value),
        None => {
            debug!(label = field.label, "no amount after label, using fallback");
            Extracted::Fallback(field.fallback)
        }
    }
}

fn extract_count(html: &str, re: &Regex, name: &str) -> Extracted<u32> {
    let parsed = re
        .captures(html)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    match parsed {
        Some(n) => Extracted::Live(n),
        None => {
            debug!(field = name, "count not found, using 0");
            Extracted::Fallback(0)
        }
    }
}

/// First `max_chars` characters of `text`, cut on a char boundary.
fn label_window(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// `"1 234,56"` -> `1234.56`.
///
/// Whitespace is dropped and the first comma becomes the decimal point.
/// Only the leading decimal number is read, so `"1.234.5"` gives `1.234`.
pub fn normalize_amount(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.replacen(',', ".", 1);
    leading_decimal(&compact)
}

fn leading_decimal(s: &str) -> Option<f64> {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = int_len;
    let mut frac_len = 0;

    if s[end..].starts_with('.') {
        frac_len = s[end + 1..].bytes().take_while(u8::is_ascii_digit).count();
        end += 1 + frac_len;
    }

    if int_len == 0 && frac_len == 0 {
        return None;
    }

    s[..end].parse().ok()
}
