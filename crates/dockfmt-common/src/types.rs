//! Entry records and format vocabularies used across the dockfmt workspace.
//!
//! Entries keep their fields as text: a port entry produced by the lenient
//! parser carries the digits exactly as written, and the typed
//! [`Protocol`] and [`VolumeMode`] enums are only consulted when a caller
//! needs to check a value against the known vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MODE, DEFAULT_PROTOCOL};
use crate::error::DockfmtError;

/// One `NAME=VALUE` environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvEntry {
    /// Variable name, trimmed.
    pub name: String,
    /// Raw value, including any leading or trailing whitespace.
    pub value: String,
}

impl EnvEntry {
    /// Creates an environment entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One `HOST:CONTAINER/PROTOCOL` port mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortEntry {
    /// Host port as numeric text.
    pub host: String,
    /// Container port as numeric text.
    pub container: String,
    /// Transport protocol. Empty is treated as `tcp` when formatting.
    #[serde(default)]
    pub protocol: String,
}

impl PortEntry {
    /// Creates a port entry.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        container: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            container: container.into(),
            protocol: protocol.into(),
        }
    }

    /// Returns the protocol, substituting `tcp` when it is empty.
    #[must_use]
    pub fn protocol_or_default(&self) -> &str {
        if self.protocol.is_empty() {
            DEFAULT_PROTOCOL
        } else {
            &self.protocol
        }
    }
}

/// One `HOST:CONTAINER:MODE` volume mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeEntry {
    /// Host path.
    pub host: String,
    /// Container path.
    pub container: String,
    /// Mount mode. Empty is treated as `rw` when formatting.
    #[serde(default)]
    pub mode: String,
}

impl VolumeEntry {
    /// Creates a volume entry.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        container: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            container: container.into(),
            mode: mode.into(),
        }
    }

    /// Returns the mode, substituting `rw` when it is empty.
    #[must_use]
    pub fn mode_or_default(&self) -> &str {
        if self.mode.is_empty() {
            DEFAULT_MODE
        } else {
            &self.mode
        }
    }
}

/// The three list formats handled by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Environment variables.
    Env,
    /// Port mappings.
    Port,
    /// Volume mappings.
    Volume,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Env => write!(f, "env"),
            Self::Port => write!(f, "port"),
            Self::Volume => write!(f, "volume"),
        }
    }
}

impl FromStr for ListKind {
    type Err = DockfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "env" => Ok(Self::Env),
            "port" => Ok(Self::Port),
            "volume" => Ok(Self::Volume),
            other => Err(DockfmtError::UnknownKind { tag: other.into() }),
        }
    }
}

/// Transport protocol of a port mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// TCP.
    Tcp,
    /// UDP.
    Udp,
    /// SCTP.
    Sctp,
}

impl Protocol {
    /// Every accepted protocol, in the order shown to users.
    pub const ALL: [Self; 3] = [Self::Tcp, Self::Udp, Self::Sctp];

    /// Returns the token used in the text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Udp => "udp",
            Self::Sctp => "sctp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = DockfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|proto| proto.as_str() == s)
            .ok_or_else(|| DockfmtError::UnknownToken {
                kind: "protocol",
                token: s.into(),
            })
    }
}

/// Mount mode of a volume mapping.
///
/// Matching is case-sensitive: `z` and `Z` are distinct SELinux relabel
/// options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VolumeMode {
    /// `rw`, read-write. The default.
    #[default]
    ReadWrite,
    /// `ro`, read-only.
    ReadOnly,
    /// `z`, relabel as shared between containers.
    SharedLabel,
    /// `Z`, relabel as private to this container.
    PrivateLabel,
}

impl VolumeMode {
    /// Every recognized mode.
    pub const ALL: [Self; 4] = [
        Self::ReadWrite,
        Self::ReadOnly,
        Self::SharedLabel,
        Self::PrivateLabel,
    ];

    /// Returns the token used in the text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ReadWrite => "rw",
            Self::ReadOnly => "ro",
            Self::SharedLabel => "z",
            Self::PrivateLabel => "Z",
        }
    }

    /// Looks up a mode token, returning `None` for anything unrecognized.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == token)
    }
}

impl fmt::Display for VolumeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolumeMode {
    type Err = DockfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| DockfmtError::UnknownToken {
            kind: "volume mode",
            token: s.into(),
        })
    }
}
