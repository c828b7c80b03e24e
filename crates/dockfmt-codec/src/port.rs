//! `HOST:CONTAINER/PROTOCOL` port mapping lists, matched with `nom`.
//!
//! The lenient path only checks the shape: digits, a colon, digits, and an
//! optional `/word` protocol. Port ranges and the protocol vocabulary are
//! enforced by validation alone, so `70000:80` parses but does not validate.

use dockfmt_common::constants::{
    DEFAULT_PROTOCOL, FIELD_SEPARATOR, PORT_MAX, PORT_MIN, PROTOCOL_SEPARATOR,
};
use dockfmt_common::types::{ListKind, PortEntry, Protocol};
use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, opt},
    sequence::preceded,
};

use crate::codec::ListCodec;
use crate::report::{LineIssue, ValidationReport};

/// Codec for port mapping lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortCodec;

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Matches `DIGITS:DIGITS` with an optional `/WORD` suffix.
fn port_mapping(input: &str) -> IResult<&str, PortEntry> {
    map(
        (
            digit1,
            char(FIELD_SEPARATOR),
            digit1,
            opt(preceded(char(PROTOCOL_SEPARATOR), take_while1(is_word_char))),
        ),
        |(host, _, container, protocol): (&str, char, &str, Option<&str>)| {
            PortEntry::new(host, container, protocol.unwrap_or(DEFAULT_PROTOCOL))
        },
    )
    .parse(input)
}

/// Returns `true` if the numeric text is a port in 1-65535.
///
/// Digit strings too long for `u32` are out of range.
fn port_in_range(digits: &str) -> bool {
    digits
        .parse::<u32>()
        .is_ok_and(|n| (PORT_MIN..=PORT_MAX).contains(&n))
}

impl ListCodec for PortCodec {
    type Entry = PortEntry;

    const KIND: ListKind = ListKind::Port;

    fn parse_line(line: &str) -> Result<PortEntry, LineIssue> {
        all_consuming(port_mapping)
            .parse(line.trim())
            .map(|(_, entry)| entry)
            .map_err(|_| LineIssue::InvalidPortFormat)
    }

    fn check_entry(entry: &PortEntry) -> Vec<LineIssue> {
        let mut issues = Vec::new();
        if !port_in_range(&entry.host) {
            issues.push(LineIssue::HostPortOutOfRange);
        }
        if !port_in_range(&entry.container) {
            issues.push(LineIssue::ContainerPortOutOfRange);
        }
        if entry.protocol_or_default().parse::<Protocol>().is_err() {
            issues.push(LineIssue::InvalidProtocol);
        }
        issues
    }

    fn format_entry(entry: &PortEntry) -> Option<String> {
        if entry.container.is_empty() {
            return None;
        }
        Some(format!(
            "{}:{}/{}",
            entry.host,
            entry.container,
            entry.protocol_or_default()
        ))
    }
}

/// Parses port mappings, dropping lines that do not match the shape.
#[must_use]
pub fn parse_port_list(text: &str) -> Vec<PortEntry> {
    PortCodec::parse(text)
}

/// Formats port mappings, one `HOST:CONTAINER/PROTOCOL` per line.
///
/// Entries with an empty container port are dropped.
#[must_use]
pub fn format_port_list(entries: &[PortEntry]) -> String {
    PortCodec::format(entries)
}

/// Validates port mapping text, including ranges and protocol.
#[must_use]
pub fn validate_port_list(text: &str) -> ValidationReport {
    PortCodec::validate(text)
}
