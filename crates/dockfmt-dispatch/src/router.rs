//! Routing from `(action, type)` tags to codec operations.

use dockfmt_codec::{EnvCodec, ListCodec, PortCodec, VolumeCodec};
use dockfmt_common::types::ListKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::{DispatchError, Result};

/// Operation requested at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Lenient text-to-entries conversion.
    Parse,
    /// Strict line-by-line validation.
    Validate,
    /// Entries-to-text conversion; the payload is a JSON entry array.
    Format,
}

impl Action {
    /// Looks up an action tag, returning `None` for anything unrecognized.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "parse" => Some(Self::Parse),
            "validate" => Some(Self::Validate),
            "format" => Some(Self::Format),
            _ => None,
        }
    }
}

/// A boundary request as received over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Action tag.
    pub action: String,
    /// List type tag.
    #[serde(rename = "type")]
    pub kind: String,
    /// Text payload. Absent means empty.
    #[serde(default)]
    pub data: String,
}

/// Runs one operation and wraps the outcome in an envelope.
///
/// Never panics; unknown tags and bad payloads become failure envelopes.
pub fn dispatch(action: &str, kind: &str, data: &str) -> Envelope {
    tracing::info!(action, kind, bytes = data.len(), "dispatching request");
    match route(action, kind, data) {
        Ok(value) => Envelope::ok(value),
        Err(err) => {
            tracing::warn!(action, kind, error = %err, "request failed");
            err.into()
        }
    }
}

/// Decodes a JSON request, dispatches it, and returns the JSON envelope.
pub fn handle_request(json: &str) -> String {
    let envelope = match serde_json::from_str::<Request>(json) {
        Ok(request) => dispatch(&request.action, &request.kind, &request.data),
        Err(source) => {
            tracing::warn!(error = %source, "malformed request");
            DispatchError::InvalidPayload { source }.into()
        }
    };
    envelope.to_json()
}

fn route(action: &str, kind: &str, data: &str) -> Result<Value> {
    let action = Action::from_tag(action).ok_or(DispatchError::UnknownAction)?;
    let kind: ListKind = kind.parse().map_err(|_| DispatchError::UnknownAction)?;
    match kind {
        ListKind::Env => run::<EnvCodec>(action, data),
        ListKind::Port => run::<PortCodec>(action, data),
        ListKind::Volume => run::<VolumeCodec>(action, data),
    }
}

fn run<C: ListCodec>(action: Action, data: &str) -> Result<Value> {
    let value = match action {
        Action::Parse => serde_json::to_value(C::parse(data))?,
        Action::Validate => serde_json::to_value(C::validate(data))?,
        Action::Format => {
            let entries: Vec<C::Entry> = serde_json::from_str(data)
                .map_err(|source| DispatchError::InvalidPayload { source })?;
            Value::String(C::format(&entries))
        }
    };
    Ok(value)
}
