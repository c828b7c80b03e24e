//! # dockfmt-common
//!
//! Shared entry types, error definitions, configuration models, and constants
//! used across the dockfmt workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and holds the records that the codec produces and the
//! dispatcher and CLI serialize.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
