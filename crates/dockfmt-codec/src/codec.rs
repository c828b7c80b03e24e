//! The contract shared by the env, port, and volume formats.
//!
//! A format supplies three per-line hooks. The whole-text operations are
//! provided here once, so the lenient and strict paths always agree on
//! which lines are readable.

use std::fmt::Debug;

use dockfmt_common::types::ListKind;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::line::content_lines;
use crate::report::{LineError, LineIssue, ValidationReport};

/// A line-oriented text format for one kind of container setting.
pub trait ListCodec {
    /// Structured record for one line.
    type Entry: Debug + Clone + PartialEq + Serialize + DeserializeOwned;

    /// Which list this codec handles.
    const KIND: ListKind;

    /// Reads one content line according to the format grammar.
    ///
    /// # Errors
    ///
    /// Returns the reason the line cannot be read as an entry.
    fn parse_line(line: &str) -> Result<Self::Entry, LineIssue>;

    /// Checks a readable entry against rules that only the strict path
    /// enforces. An empty result means the entry is valid.
    fn check_entry(_entry: &Self::Entry) -> Vec<LineIssue> {
        Vec::new()
    }

    /// Renders one entry as a line, or `None` to drop it.
    fn format_entry(entry: &Self::Entry) -> Option<String>;

    /// Parses text leniently, silently dropping unreadable lines.
    fn parse(text: &str) -> Vec<Self::Entry> {
        let entries: Vec<Self::Entry> = content_lines(text)
            .filter_map(|line| match Self::parse_line(line.text) {
                Ok(entry) => Some(entry),
                Err(issue) => {
                    tracing::trace!(kind = %Self::KIND, line = line.number, %issue, "skipping line");
                    None
                }
            })
            .collect();
        tracing::debug!(kind = %Self::KIND, entries = entries.len(), "parsed list");
        entries
    }

    /// Validates text strictly, reporting every violation.
    ///
    /// A line counts as valid iff it yields no error at all.
    fn validate(text: &str) -> ValidationReport {
        let mut errors = Vec::new();
        let mut count = 0;

        for line in content_lines(text) {
            let issues = match Self::parse_line(line.text) {
                Ok(entry) => Self::check_entry(&entry),
                Err(issue) => vec![issue],
            };
            if issues.is_empty() {
                count += 1;
            } else {
                errors.extend(issues.into_iter().map(|i| LineError::new(line.number, i)));
            }
        }

        tracing::debug!(kind = %Self::KIND, valid = count, errors = errors.len(), "validated list");
        ValidationReport::new(errors, count)
    }

    /// Formats entries as newline-joined lines, in order.
    fn format(entries: &[Self::Entry]) -> String {
        entries
            .iter()
            .filter_map(Self::format_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
