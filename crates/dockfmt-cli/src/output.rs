//! Structured input and output encodings for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encoding used for entry lists and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DataFormat {
    /// JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

impl DataFormat {
    /// Encodes `value`, pretty-printing JSON when asked.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded.
    pub fn render<T: Serialize>(self, value: &T, pretty: bool) -> anyhow::Result<String> {
        let text = match self {
            Self::Json if pretty => serde_json::to_string_pretty(value)?,
            Self::Json => serde_json::to_string(value)?,
            Self::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(text.trim_end().to_owned())
    }

    /// Decodes `text` into a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid document of the expected shape.
    pub fn decode<T: DeserializeOwned>(self, text: &str) -> anyhow::Result<T> {
        let value = match self {
            Self::Json => serde_json::from_str(text)?,
            Self::Yaml => serde_yaml::from_str(text)?,
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use dockfmt_common::types::{PortEntry, VolumeEntry};

    use super::*;

    #[test]
    fn render_compact_json() {
        let entries = vec![PortEntry::new("8080", "80", "tcp")];
        let text = DataFormat::Json.render(&entries, false).expect("render");
        assert_eq!(text, r#"[{"host":"8080","container":"80","protocol":"tcp"}]"#);
    }

    #[test]
    fn render_pretty_json_spans_lines() {
        let entries = vec![PortEntry::new("8080", "80", "tcp")];
        let text = DataFormat::Json.render(&entries, true).expect("render");
        assert!(text.lines().count() > 1);
    }

    #[test]
    fn render_yaml_has_no_trailing_newline() {
        let entries = vec![VolumeEntry::new("/a", "/b", "ro")];
        let text = DataFormat::Yaml.render(&entries, false).expect("render");
        assert!(text.contains("container: /b"), "got: {text}");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn decode_yaml_entries_with_missing_mode() {
        let text = "- host: /a\n  container: /b\n";
        let entries: Vec<VolumeEntry> = DataFormat::Yaml.decode(text).expect("decode");
        assert_eq!(entries, vec![VolumeEntry::new("/a", "/b", "")]);
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        let result: anyhow::Result<Vec<PortEntry>> = DataFormat::Json.decode(r#"{"host":"1"}"#);
        assert!(result.is_err());
    }
}
