//! Section-restricted INI parsing
//!
//! Line-oriented `[section]` / `key = value` format with `;`/`#` comment
//! lines. One parse pass reads exactly one requested section: entries in
//! other sections are skipped, and once the requested section has been read
//! the pass stops early at the next section header. Malformed lines are
//! logged and skipped; only an unreadable file fails the parse.

use crate::ConfigResult;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

const COMMENT_PREFIXES: [char; 2] = [';', '#'];

/// Parse `value` as a signed decimal integer, saturating at the `i32`
/// bounds on overflow. Leading whitespace and an optional sign are
/// accepted; parsing stops at the first non-digit.
pub fn saturating_atoi(value: &str) -> i32 {
    let mut chars = value.trim_start().chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut magnitude: i64 = 0;
    for c in chars {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        magnitude = magnitude * 10 + i64::from(digit);
        if magnitude > i64::from(i32::MAX) + 1 {
            // Far enough past the bound that the sign decides the result.
            break;
        }
    }

    if negative {
        magnitude.saturating_neg().max(i64::from(i32::MIN)) as i32
    } else {
        magnitude.min(i64::from(i32::MAX)) as i32
    }
}

/// Parse one section of an INI stream, invoking `entry` for each
/// `key = value` pair inside it. Returns whether the section was found.
pub fn parse_section<R: BufRead>(
    reader: R,
    section: &str,
    mut entry: impl FnMut(&str, &str),
) -> ConfigResult<bool> {
    let mut in_target = false;
    let mut target_seen = false;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIXES) {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            let Some(name) = rest.strip_suffix(']') else {
                warn!(line = line_no + 1, "unterminated section header, skipping");
                continue;
            };
            in_target = name.trim() == section;
            if in_target {
                target_seen = true;
            } else if target_seen {
                // The requested section has been fully read; nothing later
                // in the file can belong to it.
                break;
            }
            continue;
        }

        if !in_target {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            warn!(line = line_no + 1, "line without '=', skipping");
            continue;
        };
        entry(key.trim(), value.trim());
    }

    Ok(target_seen)
}

/// Parse one section of an INI file on disk.
pub fn parse_file(
    path: &Path,
    section: &str,
    entry: impl FnMut(&str, &str),
) -> ConfigResult<bool> {
    let file = File::open(path)?;
    parse_section(BufReader::new(file), section, entry)
}
