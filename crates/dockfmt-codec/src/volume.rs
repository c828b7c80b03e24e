//! `HOST:CONTAINER:MODE` volume mapping lists.
//!
//! Paths may contain colons, so a line is not split with a fixed grammar.
//! Instead the last two colons are located and [`resolve`] picks one row of
//! this table:
//!
//! | second-last `:` | last `:`  | text after last `:` | result                              |
//! |-----------------|-----------|---------------------|-------------------------------------|
//! | present         | present   | known mode          | host / container / mode             |
//! | present         | present   | anything else       | split at second-last, mode `rw`     |
//! | present         | present   | empty               | split at second-last, mode `rw`     |
//! | absent          | after 0   | ignored             | split at last, mode `rw`            |
//! | absent          | at 0      | ignored             | invalid                             |
//! | absent          | absent    |                     | invalid, missing separator          |
//!
//! The second row means an unknown mode token stays inside the container
//! path: `/a:/b:xx` reads as host `/a`, container `/b:xx`, mode `rw`. The
//! third is the same fallback with nothing after the last colon, so
//! `/a:/b:` keeps the trailing colon in its container path.
//!
//! Whatever row applies, a host or container made only of whitespace and
//! colons counts as empty and the line is invalid.

use dockfmt_common::constants::{DEFAULT_MODE, FIELD_SEPARATOR};
use dockfmt_common::types::{ListKind, VolumeEntry, VolumeMode};

use crate::codec::ListCodec;
use crate::report::{LineIssue, ValidationReport};

/// Codec for volume mapping lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeCodec;

/// How a volume line was split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution<'a> {
    /// Host, container, and a recognized mode.
    WithMode {
        host: &'a str,
        container: &'a str,
        mode: VolumeMode,
    },
    /// Host and container only; the mode falls back to `rw`.
    Pair { host: &'a str, container: &'a str },
    /// The only colon is the first character.
    LeadingSeparator,
    /// No colon anywhere.
    NoSeparator,
}

/// Returns `true` if a path has nothing but whitespace and separators.
fn is_blank_path(path: &str) -> bool {
    path.trim_matches(|c: char| c == FIELD_SEPARATOR || c.is_whitespace())
        .is_empty()
}

fn resolve(line: &str) -> Resolution<'_> {
    let Some(last) = line.rfind(FIELD_SEPARATOR) else {
        return Resolution::NoSeparator;
    };
    let second_last = line[..last].rfind(FIELD_SEPARATOR);
    let candidate = VolumeMode::from_token(&line[last + 1..]);

    match (second_last, candidate) {
        (Some(second), Some(mode)) => Resolution::WithMode {
            host: &line[..second],
            container: &line[second + 1..last],
            mode,
        },
        (Some(second), None) => Resolution::Pair {
            host: &line[..second],
            container: &line[second + 1..],
        },
        (None, _) if last > 0 => Resolution::Pair {
            host: &line[..last],
            container: &line[last + 1..],
        },
        (None, _) => Resolution::LeadingSeparator,
    }
}

impl ListCodec for VolumeCodec {
    type Entry = VolumeEntry;

    const KIND: ListKind = ListKind::Volume;

    fn parse_line(line: &str) -> Result<VolumeEntry, LineIssue> {
        let (host, container, mode) = match resolve(line.trim()) {
            Resolution::WithMode {
                host,
                container,
                mode,
            } => (host, container, mode.as_str()),
            Resolution::Pair { host, container } => (host, container, DEFAULT_MODE),
            Resolution::LeadingSeparator => return Err(LineIssue::InvalidVolumeFormat),
            Resolution::NoSeparator => return Err(LineIssue::MissingVolumeSeparator),
        };
        if is_blank_path(host) || is_blank_path(container) {
            return Err(LineIssue::InvalidVolumeFormat);
        }
        Ok(VolumeEntry::new(host, container, mode))
    }

    fn format_entry(entry: &VolumeEntry) -> Option<String> {
        if entry.container.is_empty() {
            return None;
        }
        Some(format!(
            "{}:{}:{}",
            entry.host,
            entry.container,
            entry.mode_or_default()
        ))
    }
}

/// Parses volume mappings, dropping unreadable lines.
#[must_use]
pub fn parse_volume_list(text: &str) -> Vec<VolumeEntry> {
    VolumeCodec::parse(text)
}

/// Formats volume mappings, one `HOST:CONTAINER:MODE` per line.
///
/// Entries with an empty container path are dropped.
#[must_use]
pub fn format_volume_list(entries: &[VolumeEntry]) -> String {
    VolumeCodec::format(entries)
}

/// Validates volume mapping text line by line.
#[must_use]
pub fn validate_volume_list(text: &str) -> ValidationReport {
    VolumeCodec::validate(text)
}
