//! Per-line issues and the validation report returned by strict checks.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a single line was rejected.
///
/// The display text is the reason shown to users after the line prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LineIssue {
    /// An env line has no `=`.
    #[error("Missing '=' separator")]
    MissingEnvSeparator,
    /// An env line has nothing but whitespace before the `=`.
    #[error("Variable name cannot be empty")]
    EmptyVariableName,
    /// A port line does not match `DIGITS:DIGITS[/WORD]`.
    #[error("Invalid format (expected HOST:CONTAINER/PROTOCOL)")]
    InvalidPortFormat,
    /// The host port is outside 1-65535.
    #[error("Host port must be 1-65535")]
    HostPortOutOfRange,
    /// The container port is outside 1-65535.
    #[error("Container port must be 1-65535")]
    ContainerPortOutOfRange,
    /// The protocol is not tcp, udp, or sctp.
    #[error("Invalid protocol (use tcp, udp, or sctp)")]
    InvalidProtocol,
    /// A volume line has no `:` at all.
    #[error("Missing ':' separator between host and container path")]
    MissingVolumeSeparator,
    /// A volume line has a `:` but no usable host and container paths.
    #[error("Invalid path format (expected /host:/container:mode)")]
    InvalidVolumeFormat,
}

impl LineIssue {
    /// Returns `true` for numeric range violations, `false` for grammar ones.
    #[must_use]
    pub const fn is_out_of_range(self) -> bool {
        matches!(self, Self::HostPortOutOfRange | Self::ContainerPortOutOfRange)
    }
}

/// A [`LineIssue`] located at a 1-based line number.
///
/// Serializes as its display string, e.g. `"Line 3: Missing '=' separator"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineError {
    /// 1-based line number in the original text.
    pub line: usize,
    /// What was wrong with the line.
    pub issue: LineIssue,
}

impl LineError {
    /// Creates a located line error.
    #[must_use]
    pub const fn new(line: usize, issue: LineIssue) -> Self {
        Self { line, issue }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.issue)
    }
}

impl std::error::Error for LineError {}

impl Serialize for LineError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of strictly validating a block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// `true` iff `errors` is empty.
    pub valid: bool,
    /// Every violation found, in line order.
    pub errors: Vec<LineError>,
    /// Number of content lines that produced no error.
    pub count: usize,
}

impl ValidationReport {
    /// Builds a report, deriving `valid` from the error list.
    #[must_use]
    pub fn new(errors: Vec<LineError>, count: usize) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            count,
        }
    }

    /// Returns the error messages as display strings.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_error_display_prefixes_line_number() {
        let err = LineError::new(4, LineIssue::MissingEnvSeparator);
        assert_eq!(err.to_string(), "Line 4: Missing '=' separator");
    }

    #[test]
    fn only_port_ranges_are_out_of_range() {
        assert!(LineIssue::HostPortOutOfRange.is_out_of_range());
        assert!(LineIssue::ContainerPortOutOfRange.is_out_of_range());
        assert!(!LineIssue::InvalidProtocol.is_out_of_range());
        assert!(!LineIssue::InvalidVolumeFormat.is_out_of_range());
    }

    #[test]
    fn report_serializes_errors_as_strings() {
        let report = ValidationReport::new(
            vec![LineError::new(2, LineIssue::HostPortOutOfRange)],
            1,
        );
        let json = serde_json::to_value(&report).expect("should serialize");
        assert_eq!(json["valid"], false);
        assert_eq!(json["count"], 1);
        assert_eq!(json["errors"][0], "Line 2: Host port must be 1-65535");
    }

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::new(Vec::new(), 0);
        assert!(report.valid);
        assert!(report.messages().is_empty());
    }
}
