//! `NAME=VALUE` environment variable lists.
//!
//! The name is everything before the first `=`, trimmed. The value is
//! everything after it, untouched, so `KEY=  padded  ` keeps its spaces and
//! `URL=a=b` keeps its second `=`.

use dockfmt_common::constants::ENV_SEPARATOR;
use dockfmt_common::types::{EnvEntry, ListKind};

use crate::codec::ListCodec;
use crate::report::{LineIssue, ValidationReport};

/// Codec for environment variable lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCodec;

impl ListCodec for EnvCodec {
    type Entry = EnvEntry;

    const KIND: ListKind = ListKind::Env;

    fn parse_line(line: &str) -> Result<EnvEntry, LineIssue> {
        let (name, value) = line
            .split_once(ENV_SEPARATOR)
            .ok_or(LineIssue::MissingEnvSeparator)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(LineIssue::EmptyVariableName);
        }
        Ok(EnvEntry::new(name, value))
    }

    fn format_entry(entry: &EnvEntry) -> Option<String> {
        if entry.name.is_empty() {
            return None;
        }
        Some(format!("{}={}", entry.name, entry.value))
    }
}

/// Parses environment variables, dropping unreadable lines.
#[must_use]
pub fn parse_env_list(text: &str) -> Vec<EnvEntry> {
    EnvCodec::parse(text)
}

/// Formats environment variables, one `NAME=VALUE` per line.
///
/// Entries with an empty name are dropped.
#[must_use]
pub fn format_env_list(entries: &[EnvEntry]) -> String {
    EnvCodec::format(entries)
}

/// Validates environment variable text line by line.
#[must_use]
pub fn validate_env_list(text: &str) -> ValidationReport {
    EnvCodec::validate(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_pair() {
        let entries = parse_env_list("TZ=Europe/Paris");
        assert_eq!(entries, vec![EnvEntry::new("TZ", "Europe/Paris")]);
    }

    #[test]
    fn parse_keeps_value_whitespace() {
        let entries = parse_env_list("  GREETING =  hello world  ");
        assert_eq!(entries[0].name, "GREETING");
        assert_eq!(entries[0].value, "  hello world  ");
    }

    #[test]
    fn parse_splits_on_first_equals_only() {
        let entries = parse_env_list("DSN=postgres://u:p@db/app?sslmode=disable");
        assert_eq!(entries[0].name, "DSN");
        assert_eq!(entries[0].value, "postgres://u:p@db/app?sslmode=disable");
    }

    #[test]
    fn parse_allows_empty_value() {
        let entries = parse_env_list("EMPTY=");
        assert_eq!(entries, vec![EnvEntry::new("EMPTY", "")]);
    }

    #[test]
    fn parse_keeps_duplicates_in_order() {
        let entries = parse_env_list("A=1\nB=2\nA=3");
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "A"]);
        assert_eq!(entries[2].value, "3");
    }

    #[test]
    fn parse_drops_invalid_lines_silently() {
        let entries = parse_env_list("NOEQUALS\n=orphan\n   =also\nOK=1");
        assert_eq!(entries, vec![EnvEntry::new("OK", "1")]);
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let entries = parse_env_list("# header\n\nPUID=99\n  # PGID=100\n");
        assert_eq!(entries, vec![EnvEntry::new("PUID", "99")]);
    }

    #[test]
    fn validate_empty_text_is_valid() {
        let report = validate_env_list("");
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.count, 0);
    }

    #[test]
    fn validate_reports_missing_separator() {
        let report = validate_env_list("A=1\nBROKEN");
        assert!(!report.valid);
        assert_eq!(report.count, 1);
        assert_eq!(report.messages(), vec!["Line 2: Missing '=' separator"]);
    }

    #[test]
    fn validate_reports_empty_name() {
        let report = validate_env_list("=value");
        assert_eq!(report.messages(), vec!["Line 1: Variable name cannot be empty"]);
        assert_eq!(report.count, 0);
    }

    #[test]
    fn validate_line_numbers_count_skipped_lines() {
        let report = validate_env_list("# comment\n\nA=1\n\nBAD");
        assert_eq!(report.messages(), vec!["Line 5: Missing '=' separator"]);
    }

    #[test]
    fn parse_and_validate_agree() {
        let text = "A=1\nB\n=C\n D = d \n# x";
        let parsed = parse_env_list(text);
        let report = validate_env_list(text);
        assert_eq!(parsed.len(), report.count);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn format_joins_with_newlines() {
        let entries = vec![EnvEntry::new("A", "1"), EnvEntry::new("B", " two ")];
        assert_eq!(format_env_list(&entries), "A=1\nB= two ");
    }

    #[test]
    fn format_drops_nameless_entries() {
        let entries = vec![EnvEntry::new("", "lost"), EnvEntry::new("KEPT", "yes")];
        assert_eq!(format_env_list(&entries), "KEPT=yes");
    }

    #[test]
    fn format_of_parse_drops_comments_and_blanks() {
        let text = "# settings\nA=1\n\nB=2\nbad line\n";
        assert_eq!(format_env_list(&parse_env_list(text)), "A=1\nB=2");
    }
}
