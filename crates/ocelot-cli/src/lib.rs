//! Ocelot CLI — library side of the `ocelot` binary.
//!
//! Holds the configuration, the handshake flow orchestration, and the
//! subcommand handlers, so the integration tests can drive the same code
//! path the binary runs.

pub mod commands;
pub mod config;
pub mod flow;

pub use config::OcelotConfig;
