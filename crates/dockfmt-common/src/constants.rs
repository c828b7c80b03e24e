//! Format vocabulary and defaults shared by every list variant.

/// Prefix that marks a trimmed line as a comment.
pub const COMMENT_PREFIX: char = '#';

/// Separator between an environment variable name and its value.
pub const ENV_SEPARATOR: char = '=';

/// Separator between host and container fields in port and volume lines.
pub const FIELD_SEPARATOR: char = ':';

/// Separator between the container port and the protocol.
pub const PROTOCOL_SEPARATOR: char = '/';

/// Protocol assumed when a port line omits one.
pub const DEFAULT_PROTOCOL: &str = "tcp";

/// Lowest valid port number.
pub const PORT_MIN: u32 = 1;

/// Highest valid port number.
pub const PORT_MAX: u32 = 65_535;

/// Mode assumed when a volume line omits one or carries an unknown token.
pub const DEFAULT_MODE: &str = "rw";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "DOCKFMT_LOG_FORMAT";

/// Environment variable holding the fallback log filter.
pub const LOG_FILTER_ENV: &str = "DOCKFMT_LOG";

/// Log filter used when neither `RUST_LOG` nor `DOCKFMT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
