//! Cross-format behavior of the list codecs.
//!
//! Covers the guarantees callers rely on when moving settings between
//! form fields and the text view:
//! 1. Entry-level round trips through text for all three formats.
//! 2. Comments never produce entries or errors.
//! 3. Lenient parsing and strict validation agree on which lines are readable.
//! 4. No input makes an operation panic.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use dockfmt_codec::{
    EnvCodec, ListCodec, PortCodec, VolumeCodec, format_env_list, format_port_list,
    format_volume_list, parse_env_list, parse_port_list, parse_volume_list, validate_env_list,
    validate_port_list, validate_volume_list,
};
use dockfmt_common::types::{EnvEntry, PortEntry, VolumeEntry};

// ── Round trips ──────────────────────────────────────────────────────

#[test]
fn env_entries_survive_format_then_parse() {
    let entries = vec![
        EnvEntry::new("PUID", "99"),
        EnvEntry::new("PADDED", "  spaced out  "),
        EnvEntry::new("DSN", "user=a password=b"),
        EnvEntry::new("EMPTY", ""),
        EnvEntry::new("PUID", "100"),
    ];
    assert_eq!(parse_env_list(&format_env_list(&entries)), entries);
}

#[test]
fn port_entries_survive_format_then_parse() {
    let entries = vec![
        PortEntry::new("8080", "80", "tcp"),
        PortEntry::new("53", "53", "udp"),
        PortEntry::new("36412", "36412", "sctp"),
    ];
    assert_eq!(parse_port_list(&format_port_list(&entries)), entries);
}

#[test]
fn port_round_trip_fills_default_protocol() {
    let entries = vec![PortEntry::new("8080", "80", "")];
    assert_eq!(
        parse_port_list(&format_port_list(&entries)),
        vec![PortEntry::new("8080", "80", "tcp")]
    );
}

#[test]
fn volume_entries_survive_format_then_parse() {
    let entries = vec![
        VolumeEntry::new("/mnt/user/appdata/myapp", "/config", "rw"),
        VolumeEntry::new("/mnt/user/media", "/media", "ro"),
        VolumeEntry::new("/srv/a", "/a", "z"),
        VolumeEntry::new("/srv/b", "/b", "Z"),
    ];
    assert_eq!(parse_volume_list(&format_volume_list(&entries)), entries);
}

#[test]
fn volume_round_trip_fills_default_mode() {
    let entries = vec![VolumeEntry::new("/a", "/b", "")];
    assert_eq!(
        parse_volume_list(&format_volume_list(&entries)),
        vec![VolumeEntry::new("/a", "/b", "rw")]
    );
}

#[test]
fn text_round_trip_drops_comments_and_blanks() {
    let text = "# Ports for the web UI\n\n8080:80\n  # 8443:443\n53:53/udp\n";
    assert_eq!(
        format_port_list(&parse_port_list(text)),
        "8080:80/tcp\n53:53/udp"
    );
}

// ── Comments ─────────────────────────────────────────────────────────

#[test]
fn comments_are_inert_in_every_operation() {
    let text = "# comment";
    assert!(parse_env_list(text).is_empty());
    assert!(parse_port_list(text).is_empty());
    assert!(parse_volume_list(text).is_empty());

    for report in [
        validate_env_list(text),
        validate_port_list(text),
        validate_volume_list(text),
    ] {
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.count, 0);
    }
}

// ── Lenient / strict agreement ───────────────────────────────────────

fn assert_parse_count_matches<C: ListCodec>(text: &str) {
    let parsed = C::parse(text);
    let report = C::validate(text);
    assert_eq!(parsed.len(), report.count, "input: {text:?}");
}

#[test]
fn parse_and_validate_agree_on_readable_lines() {
    assert_parse_count_matches::<EnvCodec>("A=1\nnope\n=x\n\n# c\nB= 2");
    assert_parse_count_matches::<PortCodec>("8080:80\nabc:80\n53:53/udp\n:80");
    assert_parse_count_matches::<VolumeCodec>("/a:/b\n/c\n:/d\n/e:/f:xx\n/g:/h:ro");
}

#[test]
fn port_validation_is_stricter_than_parsing() {
    let text = "70000:80/tcp\n80:80/http\n8080:80";
    assert_eq!(parse_port_list(text).len(), 3);
    let report = validate_port_list(text);
    assert_eq!(report.count, 1);
    assert_eq!(
        report.messages(),
        vec![
            "Line 1: Host port must be 1-65535",
            "Line 2: Invalid protocol (use tcp, udp, or sctp)",
        ]
    );
}

// ── Robustness ───────────────────────────────────────────────────────

#[test]
fn hostile_inputs_never_panic() {
    let long_line = "x".repeat(100_000);
    let many_colons = ":".repeat(10_000);
    let inputs = [
        "",
        "   ",
        "\n\n\n",
        "\r\n",
        "=",
        ":",
        "/",
        "::::",
        "é=ü",
        "ポート:80",
        "/データ:/設定:ro",
        long_line.as_str(),
        many_colons.as_str(),
    ];
    for input in inputs {
        let _ = parse_env_list(input);
        let _ = parse_port_list(input);
        let _ = parse_volume_list(input);
        let _ = validate_env_list(input);
        let _ = validate_port_list(input);
        let _ = validate_volume_list(input);
    }
}

#[test]
fn unicode_paths_split_on_ascii_colons() {
    assert_eq!(
        parse_volume_list("/データ:/設定:ro"),
        vec![VolumeEntry::new("/データ", "/設定", "ro")]
    );
}
