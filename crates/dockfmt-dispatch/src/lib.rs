//! # dockfmt-dispatch
//!
//! Stateless request boundary in front of the codecs.
//!
//! A request names an action (`parse`, `validate`, or `format`), a list type
//! (`env`, `port`, or `volume`), and a text payload. The result is always an
//! [`Envelope`](envelope::Envelope): `{"success": true, "data": ...}` or
//! `{"success": false, "error": "..."}`.
//!
//! # Example
//!
//! ```rust
//! use dockfmt_dispatch::dispatch;
//!
//! let envelope = dispatch("parse", "port", "8080:80\n53:53/udp");
//! assert!(envelope.success);
//! ```

pub mod envelope;
pub mod error;
pub mod router;

pub use envelope::Envelope;
pub use error::DispatchError;
pub use router::{Action, Request, dispatch, handle_request};
