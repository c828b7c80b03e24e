//! # dockfmt-codec
//!
//! Converts Docker container settings between structured entries and a
//! compact one-entry-per-line text form.
//!
//! Handles:
//! - **Env**: `NAME=VALUE` lines.
//! - **Port**: `HOST:CONTAINER/PROTOCOL` lines.
//! - **Volume**: `HOST:CONTAINER:MODE` lines, with positional colon resolution.
//!
//! Every format offers the same three operations through [`ListCodec`]:
//! a lenient `parse` that drops lines it cannot read, a strict `validate`
//! that reports each violation with its 1-based line number, and `format`
//! which renders entries back to text. Blank lines and `#` comments are
//! skipped everywhere. All operations are pure and never panic.

pub mod codec;
pub mod env;
pub mod line;
pub mod port;
pub mod report;
pub mod volume;

pub use codec::ListCodec;
pub use env::{EnvCodec, format_env_list, parse_env_list, validate_env_list};
pub use port::{PortCodec, format_port_list, parse_port_list, validate_port_list};
pub use report::{LineError, LineIssue, ValidationReport};
pub use volume::{VolumeCodec, format_volume_list, parse_volume_list, validate_volume_list};
